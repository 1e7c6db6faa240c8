//! Data Transfer Objects for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BallColor;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Result of a completed draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResponse {
    /// Unique id of this draw, also attached to its log events.
    pub draw_id: Uuid,

    /// When the draw happened (RFC 3339).
    pub drawn_at: DateTime<Utc>,

    /// Drawn numbers, ascending.
    pub numbers: Vec<i64>,

    /// Candidates that were in the pool.
    pub available: u64,

    /// Exclusions that fell inside the range, ascending.
    pub excluded: Vec<i64>,

    /// Balls shown tumbling inside the machine.
    pub machine: Vec<MachineBall>,

    /// Timeline for revealing the result.
    pub reveal: RevealPlan,
}

/// A decorative ball inside the lottery machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineBall {
    /// Number printed on the ball.
    pub number: i64,

    /// Palette colour.
    pub color: BallColor,

    /// CSS background for the ball.
    pub background: String,
}

/// A result ball and when it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealBall {
    /// Drawn number.
    pub number: i64,

    /// Palette colour.
    pub color: BallColor,

    /// CSS class for the ball.
    pub css_class: String,

    /// Offset from the start of the reveal, in milliseconds.
    pub reveal_at_ms: u64,

    /// Delay before the ball starts glowing, in milliseconds.
    pub glow_delay_ms: u64,
}

/// Staged reveal of a draw.
///
/// All offsets are milliseconds from the moment the client starts the reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealPlan {
    /// Machine appears and starts mixing.
    pub machine_visible_at_ms: u64,

    /// Result balls, in ascending number order.
    pub balls: Vec<RevealBall>,

    /// Mixing stops and the machine starts fading.
    pub mixing_stops_at_ms: u64,

    /// Machine is fully hidden.
    pub machine_hidden_at_ms: u64,

    /// Confetti burst starts.
    pub confetti_at_ms: u64,

    /// Confetti has finished; the reveal is over.
    pub finished_at_ms: u64,
}

/// Result of validating a draw form without drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Candidates in the pool.
    pub available: u64,

    /// Numbers that would be drawn.
    pub requested: u64,

    /// Exclusions that fall inside the range, ascending.
    pub excluded: Vec<i64>,
}

/// A single uniform random integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomResponse {
    /// Lower bound (inclusive).
    pub min: i64,

    /// Upper bound (inclusive).
    pub max: i64,

    /// The drawn value.
    pub value: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Entropy source status.
    pub entropy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error(3103, "range inverted");
        assert_eq!(response.code, 3103);
        assert_eq!(response.message, "range inverted");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_reveal_ball_serialization() {
        let ball = RevealBall {
            number: 7,
            color: BallColor::Yellow,
            css_class: BallColor::Yellow.css_class().to_string(),
            reveal_at_ms: 3600,
            glow_delay_ms: 600,
        };
        let value = serde_json::to_value(&ball).unwrap();
        assert_eq!(value["color"], "yellow");
        assert_eq!(value["css_class"], "ball-yellow");
        assert_eq!(value["reveal_at_ms"], 3600);
    }
}
