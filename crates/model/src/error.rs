//! Local validation errors.
//!
//! Validation runs entirely client-side, before any request is issued, and
//! always names the offending field so a form can highlight it.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// A draft payload failed a local required-field check.
///
/// Carries the field name so the form can attach the message to the right
/// control. Never logged remotely and never preceded by a network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field was present but its value is not acceptable.
    #[error("{field} is invalid: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidField { field, .. } => field,
        }
    }
}
