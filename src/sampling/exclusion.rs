//! Exclusion list parsing.

use std::collections::BTreeSet;

/// Parse a comma-separated exclusion list.
///
/// Each trimmed token is read as a number literal: decimal with optional
/// fraction and exponent, or `0x`/`0o`/`0b` prefixed. Tokens whose value is a
/// whole number are kept (`3.0` is 3, `1e1` is 10); empty tokens, fractions
/// such as `3.5`, and anything that is not a number are dropped. Never fails.
#[must_use]
pub fn parse_exclusions(text: &str) -> BTreeSet<i64> {
    text.split(',').filter_map(parse_whole_number).collect()
}

fn parse_whole_number(token: &str) -> Option<i64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if let Ok(value) = token.parse::<i64>() {
        return Some(value);
    }
    if let Some(value) = parse_prefixed(token) {
        return Some(value);
    }
    token.parse::<f64>().ok().and_then(whole_value)
}

/// Unsigned `0x`, `0o` and `0b` literals.
fn parse_prefixed(token: &str) -> Option<i64> {
    let (radix, digits) = match token.get(..2)? {
        "0x" | "0X" => (16, &token[2..]),
        "0o" | "0O" => (8, &token[2..]),
        "0b" | "0B" => (2, &token[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_value(value: f64) -> Option<i64> {
    // 2^63, the first value past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    (value.is_finite() && value.trunc() == value && (-LIMIT..LIMIT).contains(&value))
        .then_some(value as i64)
}
