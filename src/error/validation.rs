//! Draw request validation errors.

use crate::domain::Locale;
use crate::error::ErrorCode;

/// Reason a draw request was rejected.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The start of the range is missing or not an integer.
    #[error("Start number must be an integer")]
    InvalidStart,

    /// The end of the range is missing or not an integer.
    #[error("End number must be an integer")]
    InvalidEnd,

    /// The start of the range is greater than its end.
    #[error("Start number cannot be greater than end number")]
    RangeInverted,

    /// The draw count is missing, not an integer, or below 1.
    #[error("Draw count must be at least 1")]
    InvalidCount,

    /// The pool holds fewer candidates than requested.
    #[error("Not enough numbers to draw from (available: {available}, requested: {requested})")]
    InsufficientPool {
        /// Candidates left after exclusions.
        available: u64,
        /// Numbers the caller asked for.
        requested: u64,
    },
}

impl ValidationError {
    /// Get the error code for this validation failure.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidStart => ErrorCode::INVALID_START,
            Self::InvalidEnd => ErrorCode::INVALID_END,
            Self::RangeInverted => ErrorCode::RANGE_INVERTED,
            Self::InvalidCount => ErrorCode::INVALID_COUNT,
            Self::InsufficientPool { .. } => ErrorCode::INSUFFICIENT_POOL,
        }
    }

    /// Render the user-facing message in the given locale.
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Ko => match self {
                Self::InvalidStart => "시작 숫자를 정확히 입력해주세요.".to_string(),
                Self::InvalidEnd => "끝 숫자를 정확히 입력해주세요.".to_string(),
                Self::RangeInverted => "시작 숫자가 끝 숫자보다 클 수 없습니다.".to_string(),
                Self::InvalidCount => "뽑을 갯수는 1 이상이어야 합니다.".to_string(),
                Self::InsufficientPool {
                    available,
                    requested,
                } => format!(
                    "뽑을 수 있는 숫자가 부족합니다. (가용: {available}개, 요청: {requested}개)"
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages() {
        assert_eq!(
            ValidationError::RangeInverted.message(Locale::En),
            "Start number cannot be greater than end number"
        );
        let err = ValidationError::InsufficientPool {
            available: 5,
            requested: 10,
        };
        assert_eq!(
            err.message(Locale::En),
            "Not enough numbers to draw from (available: 5, requested: 10)"
        );
    }

    #[test]
    fn test_korean_messages_carry_payload() {
        let err = ValidationError::InsufficientPool {
            available: 3,
            requested: 6,
        };
        let message = err.message(Locale::Ko);
        assert!(message.contains("가용: 3개"));
        assert!(message.contains("요청: 6개"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ValidationError::InvalidStart.error_code(),
            ErrorCode::INVALID_START
        );
        assert_eq!(
            ValidationError::InsufficientPool {
                available: 0,
                requested: 1
            }
            .error_code(),
            ErrorCode::INSUFFICIENT_POOL
        );
    }
}
