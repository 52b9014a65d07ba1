//! Shape validation for the two input forms.
//!
//! Validation never stops at the first problem: every field is checked and
//! the failures are returned together so they can be shown next to their
//! fields.

pub mod hours;
pub mod login;

pub use hours::HourForm;
pub use login::LoginForm;

use std::fmt;

/// A single field-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Check a minimum length, counted in characters.
pub(crate) fn min_chars(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        errors.push(field, message);
    }
}

/// Convert a numeric form field. Blank input is 0, anything else must be a
/// finite decimal number.
pub(crate) fn number_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<&str>,
    default: f64,
) -> f64 {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            errors.push(field, "Expected a number.");
            0.0
        }
    }
}
