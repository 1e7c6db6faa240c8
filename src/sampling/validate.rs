//! Draw request validation.

use std::collections::BTreeSet;

use crate::domain::DrawRequest;
use crate::error::ValidationError;

/// Parse raw form text as an integer.
///
/// Reads the leading optionally signed run of decimal digits after any
/// leading whitespace and ignores the rest, so `"6.5"` and `"6abc"` both read
/// as 6. Yields `None` when there is no leading digit or the prefix does not
/// fit in an `i64`.
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse().ok()
}

/// Count the numbers in `[start, end]` that are not excluded.
///
/// Saturates at `u64::MAX` for the full `i64` span.
#[must_use]
pub fn available_count(start: i64, end: i64, exclude: &BTreeSet<i64>) -> u64 {
    if start > end {
        return 0;
    }
    let total = u128::from(start.abs_diff(end)) + 1;
    let excluded = exclude.range(start..=end).count() as u128;
    u64::try_from(total - excluded).unwrap_or(u64::MAX)
}

/// Validate a draw request.
///
/// `None` for `start`, `end` or `count` means the raw value was not an
/// integer. Checks run in a fixed order and stop at the first failure:
/// start, end, range order, count, pool size.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the request trips.
pub fn validate(
    start: Option<i64>,
    end: Option<i64>,
    count: Option<i64>,
    exclude: BTreeSet<i64>,
) -> Result<DrawRequest, ValidationError> {
    let start = start.ok_or(ValidationError::InvalidStart)?;
    let end = end.ok_or(ValidationError::InvalidEnd)?;
    if start > end {
        return Err(ValidationError::RangeInverted);
    }

    let requested = count
        .filter(|&count| count >= 1)
        .ok_or(ValidationError::InvalidCount)?
        .unsigned_abs();

    let available = available_count(start, end, &exclude);
    if available < requested {
        return Err(ValidationError::InsufficientPool {
            available,
            requested,
        });
    }

    Ok(DrawRequest::from_parts(
        start, end, requested, exclude, available,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" 42 "), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("   "), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_integer_reads_leading_digits() {
        assert_eq!(parse_integer("6.5"), Some(6));
        assert_eq!(parse_integer("6abc"), Some(6));
        assert_eq!(parse_integer("  -12.9 "), Some(-12));
        assert_eq!(parse_integer("0x10"), Some(0));
        assert_eq!(parse_integer("1e3"), Some(1));
        assert_eq!(parse_integer("abc6"), None);
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("- 7"), None);
        assert_eq!(parse_integer("+"), None);
    }

    #[test]
    fn test_valid_request() {
        let request = validate(Some(1), Some(45), Some(6), BTreeSet::from([3, 7])).unwrap();
        assert_eq!(request.start(), 1);
        assert_eq!(request.end(), 45);
        assert_eq!(request.count(), 6);
        assert_eq!(request.available(), 43);
    }

    #[test]
    fn test_check_order() {
        assert_eq!(
            validate(None, None, None, BTreeSet::new()),
            Err(ValidationError::InvalidStart)
        );
        assert_eq!(
            validate(Some(1), None, None, BTreeSet::new()),
            Err(ValidationError::InvalidEnd)
        );
        assert_eq!(
            validate(Some(10), Some(5), Some(1), BTreeSet::new()),
            Err(ValidationError::RangeInverted)
        );
        assert_eq!(
            validate(Some(10), Some(5), Some(0), BTreeSet::new()),
            Err(ValidationError::RangeInverted)
        );
    }

    #[test]
    fn test_invalid_count() {
        for count in [None, Some(0), Some(-3)] {
            assert_eq!(
                validate(Some(1), Some(5), count, BTreeSet::new()),
                Err(ValidationError::InvalidCount)
            );
        }
    }

    #[test]
    fn test_insufficient_pool() {
        assert_eq!(
            validate(Some(1), Some(5), Some(10), BTreeSet::new()),
            Err(ValidationError::InsufficientPool {
                available: 5,
                requested: 10
            })
        );
        assert_eq!(
            validate(Some(1), Some(5), Some(4), BTreeSet::from([2, 4, 100])),
            Err(ValidationError::InsufficientPool {
                available: 3,
                requested: 4
            })
        );
    }

    #[test]
    fn test_pool_exactly_count() {
        let request = validate(Some(1), Some(5), Some(5), BTreeSet::new()).unwrap();
        assert_eq!(request.available(), 5);
    }

    #[test]
    fn test_available_count_edges() {
        assert_eq!(available_count(5, 1, &BTreeSet::new()), 0);
        assert_eq!(available_count(3, 3, &BTreeSet::from([3])), 0);
        assert_eq!(available_count(-2, 2, &BTreeSet::from([-2, 0, 9])), 3);
        assert_eq!(available_count(i64::MIN, i64::MAX, &BTreeSet::new()), u64::MAX);
        assert_eq!(
            available_count(i64::MIN, i64::MAX, &BTreeSet::from([0, 1])),
            u64::MAX - 1
        );
    }
}
