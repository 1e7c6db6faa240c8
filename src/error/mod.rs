//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;
pub mod validation;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

pub use codes::{ErrorCategory, ErrorCode};
pub use validation::ValidationError;

use crate::domain::Locale;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Draw request failed validation.
    ///
    /// The message is rendered in the caller's locale when the error is built.
    #[error("{message}")]
    Validation {
        /// Validation failure kind.
        kind: ValidationError,
        /// Localized message.
        message: String,
    },

    /// Range is larger than the service is configured to enumerate.
    #[error("Range too large: {size} numbers (limit: {limit})")]
    RangeTooLarge {
        /// Requested range size.
        size: u128,
        /// Configured limit.
        limit: u64,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Sampling engine error.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a validation error with its message rendered in `locale`.
    #[must_use]
    pub fn validation(kind: ValidationError, locale: Locale) -> Self {
        Self::Validation {
            kind,
            message: kind.message(locale),
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation { kind, .. } => kind.error_code(),
            Self::RangeTooLarge { .. } => ErrorCode::RANGE_TOO_LARGE,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            Self::Sampling(SamplingError::InvalidRange { .. }) => ErrorCode::INVALID_RANGE,
            Self::Sampling(SamplingError::Entropy(_)) => ErrorCode::ENTROPY_UNAVAILABLE,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::RangeTooLarge { .. }
            | Self::BadRequest(_)
            | Self::Sampling(SamplingError::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Sampling(SamplingError::Entropy(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured details attached to the error body, if any.
    #[must_use]
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Validation {
                kind:
                    ValidationError::InsufficientPool {
                        available,
                        requested,
                    },
                ..
            } => Some(json!({
                "available": available,
                "requested": requested
            })),
            Self::RangeTooLarge { size, limit } => Some(json!({
                "size": size.to_string(),
                "limit": limit
            })),
            _ => None,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let category = error_code.category();
        let code = error_code.as_i32();
        let message = self.to_string();

        metrics::counter!("lotto_errors_total", "category" => category.to_string())
            .increment(1);

        if status.is_server_error() {
            tracing::error!(
                error_code = code,
                %category,
                status = %status,
                message = %message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = code,
                %category,
                status = %status,
                message = %message,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": self.details()
        }));

        (status, body).into_response()
    }
}

/// Sampling engine error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplingError {
    /// Uniform generator called with `max < min`.
    #[error("Invalid range: max ({max}) must be greater than or equal to min ({min})")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// The entropy source failed to produce bytes.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `SamplingError`.
pub type SamplingResult<T> = std::result::Result<T, SamplingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::validation(ValidationError::InvalidStart, Locale::En).error_code(),
            ErrorCode::INVALID_START
        );
        assert_eq!(
            AppError::Sampling(SamplingError::InvalidRange { min: 5, max: 2 }).error_code(),
            ErrorCode::INVALID_RANGE
        );
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            ErrorCode::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation(ValidationError::RangeInverted, Locale::En).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Sampling(SamplingError::Entropy("gone".to_string())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_message_is_localized() {
        let err = AppError::validation(ValidationError::InvalidCount, Locale::Ko);
        assert_eq!(err.to_string(), "뽑을 갯수는 1 이상이어야 합니다.");
    }

    #[test]
    fn test_insufficient_pool_details() {
        let err = AppError::validation(
            ValidationError::InsufficientPool {
                available: 5,
                requested: 10,
            },
            Locale::En,
        );
        let details = err.details().unwrap();
        assert_eq!(details["available"], 5);
        assert_eq!(details["requested"], 10);
        assert!(AppError::BadRequest("x".to_string()).details().is_none());
    }
}
