//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse, ReadyComponents, ReadyResponse};
use crate::error::ErrorCode;

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Readiness probe - checks that the entropy source can serve draws.
pub async fn ready() -> (StatusCode, Json<ApiResponse<ReadyResponse>>) {
    let mut probe = [0u8; 1];
    let entropy_ok = OsRng.try_fill_bytes(&mut probe).is_ok();

    let data = ReadyResponse {
        ready: entropy_ok,
        components: ReadyComponents {
            entropy: entropy_ok,
        },
    };

    if entropy_ok {
        (StatusCode::OK, Json(ApiResponse::success(data)))
    } else {
        let response = ApiResponse {
            code: ErrorCode::SERVICE_UNAVAILABLE.as_i32(),
            message: "service unavailable".to_string(),
            data: Some(data),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    let mut output = String::new();

    output.push_str("# HELP lotto_up Whether the service is up\n");
    output.push_str("# TYPE lotto_up gauge\n");
    output.push_str("lotto_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    output
}
