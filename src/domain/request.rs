//! Draw request types.
//!
//! [`DrawForm`] is the raw input as a form or client sends it; [`DrawRequest`]
//! is the typed request the sampling engine accepts, and can only be built by
//! [`crate::sampling::validate`].

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::Locale;

/// A validated draw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    start: i64,
    end: i64,
    count: u64,
    exclude: BTreeSet<i64>,
    available: u64,
}

impl DrawRequest {
    pub(crate) const fn from_parts(
        start: i64,
        end: i64,
        count: u64,
        exclude: BTreeSet<i64>,
        available: u64,
    ) -> Self {
        Self {
            start,
            end,
            count,
            exclude,
            available,
        }
    }

    /// First number of the range (inclusive).
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last number of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Numbers to draw.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Numbers removed from the pool.
    #[must_use]
    pub const fn exclude(&self) -> &BTreeSet<i64> {
        &self.exclude
    }

    /// Candidates left in the pool after exclusions.
    #[must_use]
    pub const fn available(&self) -> u64 {
        self.available
    }

    /// Size of `[start, end]` before exclusions.
    #[must_use]
    pub fn range_size(&self) -> u128 {
        u128::from(self.start.abs_diff(self.end)) + 1
    }

    /// Exclusions that fall inside the range, ascending.
    #[must_use]
    pub fn excluded_in_range(&self) -> Vec<i64> {
        self.exclude.range(self.start..=self.end).copied().collect()
    }
}

/// Raw draw input.
///
/// Every numeric field is kept as text until validation so that a malformed
/// value is reported as a validation failure instead of a decode error.
/// Fields accept either strings or JSON numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawForm {
    /// First number of the range.
    #[serde(default, deserialize_with = "form_field")]
    pub start: String,

    /// Last number of the range.
    #[serde(default, deserialize_with = "form_field")]
    pub end: String,

    /// How many numbers to draw.
    #[serde(default, deserialize_with = "form_field")]
    pub count: String,

    /// Comma-separated numbers to leave out.
    #[serde(default, deserialize_with = "form_field")]
    pub exclude: String,

    /// Language for error messages.
    #[serde(default)]
    pub lang: Option<Locale>,
}

impl DrawForm {
    /// Create a form from its raw field values.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        count: impl Into<String>,
        exclude: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            count: count.into(),
            exclude: exclude.into(),
            lang: None,
        }
    }

    /// Set the message language.
    #[must_use]
    pub const fn with_lang(mut self, lang: Locale) -> Self {
        self.lang = Some(lang);
        self
    }
}

/// Accept a form field given as a string or a JSON number.
fn form_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawField::deserialize(deserializer)? {
        RawField::Int(n) => n.to_string(),
        RawField::Float(f) => f.to_string(),
        RawField::Text(s) => s,
    })
}
