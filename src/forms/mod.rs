//! Request bodies accepted by the API and their validation rules.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub mod owner;
pub mod pet;
pub mod visit;

#[derive(Debug, Error)]
/// Errors that can occur when processing a request body.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unknown pet type")]
    UnknownPetType,
}

/// Builds a single-field validation failure.
pub fn field_error(field: &'static str, code: &'static str, message: &'static str) -> FormError {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(message.into()));
    FormError::Validation(errors)
}

/// Rejects strings that are empty or contain only whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
