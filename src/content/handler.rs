//! HTTP handlers for the Items API
//!
//! Read-only endpoints over the content catalog:
//! - GET /api/v1/items          - visible items (`?category=&q=`), newest first
//! - GET /api/v1/items/counts   - category counts over the whole catalog
//! - GET /api/v1/items/:id      - item detail

use crate::content::catalog::ContentCatalog;
use crate::content::types::{ApiError, ContentQuery};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for item handlers
#[derive(Clone)]
pub struct ContentState {
    pub catalog: Arc<ContentCatalog>,
}

/// Create the items router
pub fn content_router(state: ContentState) -> Router {
    Router::new()
        .route("/api/v1/items", get(list_items))
        .route("/api/v1/items/counts", get(get_counts))
        .route("/api/v1/items/:id", get(get_item))
        .with_state(state)
}

/// `?category=&q=` parameters shared by list-style endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl FilterParams {
    /// Missing category means `all`; missing text means no text filter
    pub fn into_query(self) -> Result<ContentQuery, ApiError> {
        let category = self.category.as_deref().unwrap_or("all");
        ContentQuery::parse(category, self.q.unwrap_or_default())
            .map_err(|e| ApiError::invalid_category(e.to_string()))
    }
}

/// GET /api/v1/items
async fn list_items(
    State(state): State<ContentState>,
    Query(params): Query<FilterParams>,
) -> Response {
    match params.into_query() {
        Ok(query) => Json(state.catalog.query(&query)).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
    }
}

/// GET /api/v1/items/counts
async fn get_counts(State(state): State<ContentState>) -> impl IntoResponse {
    Json(state.catalog.counts())
}

/// GET /api/v1/items/:id
async fn get_item(State(state): State<ContentState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(item) => Json(item).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found(format!("Item {} not found", id))),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::Utc;
    use tower::ServiceExt;

    fn make_app() -> Router {
        let catalog = Arc::new(ContentCatalog::sample(Utc::now()));
        content_router(ContentState { catalog })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 64)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn ids(json: &serde_json::Value) -> Vec<String> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_all() {
        let (status, json) = get_json(make_app(), "/api/v1/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["1", "5", "2", "4", "3"]);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let (status, json) = get_json(make_app(), "/api/v1/items?category=memory").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["5", "2"]);
        assert_eq!(json[0]["type"], "memory");
    }

    #[tokio::test]
    async fn test_list_with_query() {
        let (status, json) =
            get_json(make_app(), "/api/v1/items?category=all&q=OPENCLAW").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["3"]);
    }

    #[tokio::test]
    async fn test_list_no_match() {
        let (status, json) = get_json(make_app(), "/api/v1/items?q=zzz_no_match").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_invalid_category() {
        let (status, json) = get_json(make_app(), "/api/v1/items?category=task").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_CATEGORY");
    }

    #[tokio::test]
    async fn test_get_counts() {
        let (status, json) = get_json(make_app(), "/api/v1/items/counts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["all"], 5);
        assert_eq!(json["note"], 1);
        assert_eq!(json["conversation"], 2);
        assert_eq!(json["memory"], 2);
    }

    #[tokio::test]
    async fn test_get_item() {
        let (status, json) = get_json(make_app(), "/api/v1/items/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "Skills 探索");
        assert_eq!(json["source"], "kimi");
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let (status, json) = get_json(make_app(), "/api/v1/items/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_filter_params_defaults() {
        let query = FilterParams::default().into_query().unwrap();
        assert_eq!(query, ContentQuery::default());
    }
}
