//! HTTP handler for the dashboard view
//!
//! - GET /api/v1/dashboard - full page model for `?category=&q=`

use crate::config::DisplayConfig;
use crate::content::catalog::ContentCatalog;
use crate::content::handler::FilterParams;
use crate::dashboard::view::DashboardView;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

/// Shared state for the dashboard handler
#[derive(Clone)]
pub struct DashboardState {
    pub catalog: Arc<ContentCatalog>,
    pub display: DisplayConfig,
}

/// Create the dashboard router
pub fn dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(get_dashboard))
        .with_state(state)
}

/// GET /api/v1/dashboard
async fn get_dashboard(
    State(state): State<DashboardState>,
    Query(params): Query<FilterParams>,
) -> Response {
    match params.into_query() {
        Ok(query) => {
            let view = DashboardView::build(&state.catalog, &query, Utc::now(), &state.display);
            Json(view).into_response()
        }
        Err(err) => (StatusCode::BAD_REQUEST, Json(err)).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn make_app() -> Router {
        let state = DashboardState {
            catalog: Arc::new(ContentCatalog::sample(Utc::now())),
            display: DisplayConfig::default(),
        };
        dashboard_router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = make_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 64)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_default() {
        let (status, json) = get_json("/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["visibleCount"], 5);
        assert_eq!(json["empty"], false);
        assert_eq!(json["stats"][0]["value"], 5);
        assert_eq!(json["tabs"][0]["active"], true);
    }

    #[tokio::test]
    async fn test_dashboard_empty_state() {
        let (status, json) = get_json("/api/v1/dashboard?category=note&q=zzz_no_match").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["empty"], true);
        assert_eq!(json["tabs"][1]["count"], 1);
        assert_eq!(json["stats"][0]["value"], 5);
    }

    #[tokio::test]
    async fn test_dashboard_invalid_category() {
        let (status, json) = get_json("/api/v1/dashboard?category=everything").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INVALID_CATEGORY");
    }
}
