//! Unified API router for SecondBrain
//!
//! Merges the module routers into a single axum `Router` with CORS and
//! request tracing, and serves it until Ctrl+C.
//!
//! ## Endpoint Map
//!
//! | Prefix               | Module    | Description                       |
//! |----------------------|-----------|-----------------------------------|
//! | `/health`            | api       | Health probe                      |
//! | `/api/v1/items/*`    | content   | Filtered items, counts, detail    |
//! | `/api/v1/dashboard`  | dashboard | Full page model                   |

use crate::config::{BrainConfig, DisplayConfig};
use crate::content::{content_router, ContentCatalog, ContentState};
use crate::dashboard::{dashboard_router, DashboardState};
use crate::error::Result;
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete SecondBrain HTTP application
pub fn build_app(
    catalog: Arc<ContentCatalog>,
    display: DisplayConfig,
    cors_origins: &[String],
) -> Router {
    let content_state = ContentState {
        catalog: catalog.clone(),
    };
    let dashboard_state = DashboardState { catalog, display };

    Router::new()
        .route("/health", get(health_check))
        .merge(content_router(content_state))
        .merge(dashboard_router(dashboard_state))
        .layer(build_cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl+C
pub async fn serve(config: &BrainConfig, catalog: Arc<ContentCatalog>) -> Result<()> {
    let app = build_app(
        catalog,
        config.display.clone(),
        &config.server.cors_origins,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("SecondBrain API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("SecondBrain API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use tower::ServiceExt;

    fn make_app(origins: &[String]) -> Router {
        let catalog = Arc::new(ContentCatalog::sample(Utc::now()));
        build_app(catalog, DisplayConfig::default(), origins)
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = health_check().await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_merged_routes() {
        let app = make_app(&[]);

        for uri in ["/health", "/api/v1/items", "/api/v1/items/counts", "/api/v1/dashboard"] {
            let resp = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let resp = make_app(&[])
            .oneshot(Request::builder().uri("/api/v1/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allowed_origin() {
        let app = make_app(&["http://localhost:3000".to_string()]);
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    #[tokio::test]
    async fn test_cors_unlisted_origin() {
        let app = make_app(&[
            "http://localhost:3000".to_string(),
            "https://brain.example.com".to_string(),
        ]);
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://evil.example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
