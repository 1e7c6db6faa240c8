//! Body and query extractors that report decode failures in the API error
//! envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
