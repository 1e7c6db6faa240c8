//! Router setup and configuration.

use std::sync::Arc;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{draw, health};
use crate::api::state::AppState;
use crate::error::AppError;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    // Health and metrics routes
    let mut health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    if config.observability.metrics_enabled {
        health_routes = health_routes.route(
            &config.observability.metrics_path,
            get(health::metrics),
        );
    }

    // Draw routes
    let draw_routes = Router::new()
        .route(
            "/draw",
            post(draw::draw_numbers).get(draw::draw_numbers_query),
        )
        .route("/validate", post(draw::validate_form))
        .route("/random", get(draw::random_integer));

    let mut router = Router::new()
        .merge(health_routes)
        .nest("/v1", draw_routes);

    // Static front end for everything else
    router = if config.ui.enabled {
        router.fallback_service(ServeDir::new(&config.ui.path))
    } else {
        router.fallback(not_found)
    };

    router = router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    if config.server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

/// Unknown paths answer in the API error envelope.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn app(config: AppConfig) -> Router {
        create_router(AppState::new(Arc::new(config)))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = app(AppConfig::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_draw_query_route() {
        let response = app(AppConfig::default())
            .oneshot(
                Request::get("/v1/draw?start=1&end=10&count=3&exclude=2,4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["numbers"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"]["excluded"], serde_json::json!([2, 4]));
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let response = app(AppConfig::default())
            .oneshot(
                Request::post("/v1/validate")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"start":"1","end":"5","count":"10"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["code"], 3105);
        assert_eq!(body["data"]["available"], 5);
        assert_eq!(body["data"]["requested"], 10);
    }

    #[tokio::test]
    async fn test_metrics_route_can_be_disabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_enabled = false;
        let response = app(config)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["code"], 4001);
        assert_eq!(body["message"], "Resource not found: /metrics");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let response = app(AppConfig::default())
            .oneshot(
                Request::post("/v1/draw")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"start": "1", "end""#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["code"], 3001);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request: "));
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_bad_random_query_uses_error_envelope() {
        let response = app(AppConfig::default())
            .oneshot(
                Request::get("/v1/random?min=a&max=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["code"], 3001);
    }

    #[tokio::test]
    async fn test_static_files_served_when_enabled() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>lotto</h1>").unwrap();

        let mut config = AppConfig::default();
        config.ui.enabled = true;
        config.ui.path = dir.path().to_path_buf();

        let response = app(config)
            .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>lotto</h1>");
    }
}
