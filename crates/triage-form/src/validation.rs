//! Per-field validation
//!
//! Each field is validated on its own against the catalog rule. An empty
//! value is "missing" and is checked before any numeric parse, so it can
//! never be mistaken for zero. Non-numeric input in a numeric field is an
//! explicit parse error rather than a silent failed comparison.

use thiserror::Error;

use crate::fields::Field;

/// A field-scoped validation failure. Local and user-correctable; it
/// blocks submission but never escalates beyond the session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field left empty.
    #[error("{0}")]
    Required(&'static str),

    /// Numeric field holds something that does not parse as a number.
    #[error("{0} must be a number")]
    NotANumber(&'static str),

    /// Numeric field parsed below its minimum.
    #[error("{0}")]
    BelowMinimum(&'static str),
}

/// Validate one field's raw value. Independent of every other field.
pub fn validate(field: Field, raw: &str) -> Result<(), FieldError> {
    let rule = field.rule();

    let Some(required_message) = rule.required else {
        // Optional field, nothing to check.
        return Ok(());
    };

    if raw.is_empty() {
        return Err(FieldError::Required(required_message));
    }

    if let Some((minimum, minimum_message)) = rule.minimum {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| FieldError::NotANumber(field.label()))?;
        if value < minimum {
            return Err(FieldError::BelowMinimum(minimum_message));
        }
    }

    Ok(())
}
