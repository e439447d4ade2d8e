//! Field-level validation primitives.
//!
//! Each check inspects one value and returns `Some(FieldViolation)` when the
//! value breaks the rule. Callers collect the violations for a whole
//! submission so every problem is reported at once.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rule identifiers reported in [`FieldViolation::rule`].
pub const RULE_REQUIRED: &str = "required";
pub const RULE_NOT_BLANK: &str = "not_blank";
pub const RULE_LENGTH: &str = "length";
pub const RULE_RANGE: &str = "range";
pub const RULE_ENUM_VALUES: &str = "enum_values";
pub const RULE_PATTERN: &str = "pattern";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, rule: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Reject a missing value.
pub fn check_required<T>(field: &str, value: Option<&T>) -> Option<FieldViolation> {
    match value {
        Some(_) => None,
        None => Some(FieldViolation::new(
            field,
            RULE_REQUIRED,
            format!("{field} is required"),
        )),
    }
}

/// Reject a missing, empty, or whitespace-only string.
pub fn check_not_blank(field: &str, value: Option<&str>) -> Option<FieldViolation> {
    match value {
        Some(s) if !s.trim().is_empty() => None,
        _ => Some(FieldViolation::new(
            field,
            RULE_NOT_BLANK,
            format!("{field} must not be blank"),
        )),
    }
}

/// Reject a string whose length in UTF-16 code units falls outside `min..=max`.
///
/// Characters outside the Basic Multilingual Plane count twice. A missing
/// value passes; presence is enforced by [`check_not_blank`].
pub fn check_length(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Option<FieldViolation> {
    let len = value?.encode_utf16().count();
    if (min..=max).contains(&len) {
        None
    } else {
        Some(FieldViolation::new(
            field,
            RULE_LENGTH,
            format!("{field} must be between {min} and {max} characters"),
        ))
    }
}

/// Reject a number outside `min..=max`. A missing number is out of range.
pub fn check_range(field: &str, value: Option<i64>, min: i64, max: i64) -> Option<FieldViolation> {
    match value {
        Some(n) if (min..=max).contains(&n) => None,
        _ => Some(FieldViolation::new(
            field,
            RULE_RANGE,
            format!("{field} must be between {min} and {max}"),
        )),
    }
}

/// Reject a present string that does not match `pattern`.
pub fn check_pattern(field: &str, value: Option<&str>, pattern: &Regex) -> Option<FieldViolation> {
    let s = value?;
    if pattern.is_match(s) {
        None
    } else {
        Some(FieldViolation::new(
            field,
            RULE_PATTERN,
            format!("{field} must match {}", pattern.as_str()),
        ))
    }
}
