//! Error code constants.
//!
//! Error codes are organized by category:
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Internal/System errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Validation Errors (3xxx) =====

    /// Bad request / invalid parameters.
    pub const BAD_REQUEST: Self = Self(3001);

    /// Start of the range is not an integer.
    pub const INVALID_START: Self = Self(3101);

    /// End of the range is not an integer.
    pub const INVALID_END: Self = Self(3102);

    /// Start of the range is greater than its end.
    pub const RANGE_INVERTED: Self = Self(3103);

    /// Draw count is not a positive integer.
    pub const INVALID_COUNT: Self = Self(3104);

    /// Fewer candidates than requested numbers.
    pub const INSUFFICIENT_POOL: Self = Self(3105);

    /// Random integer requested with `max < min`.
    pub const INVALID_RANGE: Self = Self(3106);

    /// Range exceeds the configured size limit.
    pub const RANGE_TOO_LARGE: Self = Self(3107);

    // ===== Resource Errors (4xxx) =====

    /// Resource not found.
    pub const NOT_FOUND: Self = Self(4001);

    // ===== Internal/System Errors (5xxx) =====

    /// Internal server error.
    pub const INTERNAL_ERROR: Self = Self(5002);

    /// Service unavailable.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Entropy source failed to produce random bytes.
    pub const ENTROPY_UNAVAILABLE: Self = Self(5004);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            3000..=3999 => ErrorCategory::Validation,
            4000..=4999 => ErrorCategory::Resource,
            5000..=5999 => ErrorCategory::Internal,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Validation errors (3xxx).
    Validation,
    /// Resource errors (4xxx).
    Resource,
    /// Internal/system errors (5xxx).
    Internal,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Resource => write!(f, "resource"),
            Self::Internal => write!(f, "internal"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
