//! Draw handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::api::extractors::{ApiJson, ApiQuery};
use crate::api::state::AppState;
use crate::domain::{ApiResponse, DrawForm, DrawResponse, RandomResponse, ValidateResponse};
use crate::error::{AppError, Result};

/// Query parameters for a single random integer.
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Lower bound (inclusive).
    pub min: i64,

    /// Upper bound (inclusive).
    pub max: i64,
}

/// Draw numbers from a JSON form.
///
/// # Errors
///
/// Returns an error if the form is invalid or entropy is unavailable.
pub async fn draw_numbers(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<DrawForm>,
) -> Result<Json<ApiResponse<DrawResponse>>> {
    run_draw(&state, form).await
}

/// Draw numbers from query parameters.
///
/// # Errors
///
/// Returns an error if the form is invalid or entropy is unavailable.
pub async fn draw_numbers_query(
    State(state): State<AppState>,
    ApiQuery(form): ApiQuery<DrawForm>,
) -> Result<Json<ApiResponse<DrawResponse>>> {
    run_draw(&state, form).await
}

/// Pool enumeration is CPU-bound, so draws run off the async workers.
async fn run_draw(state: &AppState, form: DrawForm) -> Result<Json<ApiResponse<DrawResponse>>> {
    let service = Arc::clone(&state.draw_service);

    let response = tokio::task::spawn_blocking(move || service.draw(&form))
        .await
        .map_err(|e| AppError::Internal(format!("draw task failed: {e}")))??;

    Ok(Json(ApiResponse::success(response)))
}

/// Validate a form without drawing.
///
/// # Errors
///
/// Returns the validation error the form trips.
pub async fn validate_form(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<DrawForm>,
) -> Result<Json<ApiResponse<ValidateResponse>>> {
    let request = state.draw_service.prepare(&form)?;

    Ok(Json(ApiResponse::success(ValidateResponse {
        available: request.available(),
        requested: request.count(),
        excluded: request.excluded_in_range(),
    })))
}

/// Draw one uniform integer in `[min, max]`.
///
/// # Errors
///
/// Returns an error if `max < min` or entropy is unavailable.
pub async fn random_integer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RandomQuery>,
) -> Result<Json<ApiResponse<RandomResponse>>> {
    let response = state.draw_service.random_integer(query.min, query.max)?;
    Ok(Json(ApiResponse::success(response)))
}
