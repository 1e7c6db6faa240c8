//! Domain models for the lottery picker.
//!
//! This module contains the draw request types, the ball palette, message
//! locales, and API contracts.

pub mod ball;
pub mod dto;
pub mod locale;
pub mod request;

pub use ball::BallColor;
pub use dto::{
    ApiResponse, DrawResponse, HealthResponse, MachineBall, RandomResponse, ReadyComponents,
    ReadyResponse, RevealBall, RevealPlan, ValidateResponse,
};
pub use locale::Locale;
pub use request::{DrawForm, DrawRequest};
