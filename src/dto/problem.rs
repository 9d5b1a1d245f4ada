//! RFC 7807 style error body returned for rejected requests.

use convert_case::{Case, Casing};
use serde::Serialize;
use validator::ValidationErrors;

use crate::forms::FormError;

/// A single offending request field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldErrorDto {
    /// Field name as it appears on the wire.
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub schema_validation_errors: Vec<FieldErrorDto>,
}

impl ProblemDetail {
    pub fn bad_request(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: title.into(),
            status: 400,
            detail: detail.into(),
            schema_validation_errors: Vec::new(),
        }
    }

    pub fn from_form_error(err: &FormError) -> Self {
        match err {
            FormError::Validation(errors) => Self {
                schema_validation_errors: field_errors(errors),
                ..Self::bad_request("Validation failed", "Request body failed validation.")
            },
            FormError::UnknownPetType => Self {
                schema_validation_errors: vec![FieldErrorDto {
                    field: "type".to_string(),
                    code: "unknown".to_string(),
                    message: "must reference an existing pet type id".to_string(),
                }],
                ..Self::bad_request("Validation failed", "Request body failed validation.")
            },
        }
    }
}

/// Flattens validator output into wire-named field errors sorted by field.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldErrorDto> {
    let mut result: Vec<FieldErrorDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            let field = wire_field_name(&field.to_string());
            failures.iter().map(move |failure| FieldErrorDto {
                field: field.clone(),
                code: failure.code.to_string(),
                message: failure
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("invalid value ({})", failure.code)),
            })
        })
        .collect();
    result.sort_by(|a, b| a.field.cmp(&b.field));
    result
}

/// Maps a Rust field name to its JSON key.
fn wire_field_name(field: &str) -> String {
    match field {
        "pet_type" => "type".to_string(),
        field => field.to_case(Case::Camel),
    }
}
