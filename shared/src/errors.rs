//! Error types for the Macro Tracker engine

use thiserror::Error;

/// Validation failures surfaced to the caller
///
/// These are the only recoverable errors the engine produces. Degenerate
/// numeric inputs to the estimators are not errors; they resolve through the
/// documented clamping policy instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Macro percentages must add up to 100% (got {sum}%)")]
    PercentageSum { sum: f64 },

    #[error("{field}: {message}")]
    Field { field: String, message: String },
}

impl ValidationError {
    /// Build a field-level error
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ValidationError::PercentageSum { .. } => None,
            ValidationError::Field { field, .. } => Some(field),
        }
    }
}
