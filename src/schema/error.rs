use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to the first problem found with it
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },

    #[error("System field '{0}' cannot be set via API input")]
    SystemField(&'static str),

    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Update must change at least one field")]
    EmptyPatch,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl SchemaError {
    pub(crate) fn validation(entity: &str, field_errors: FieldErrors) -> Self {
        let message = match field_errors.len() {
            1 => format!("Invalid {}: 1 field failed validation", entity),
            n => format!("Invalid {}: {} fields failed validation", entity, n),
        };
        SchemaError::Validation {
            message,
            field_errors,
        }
    }

    /// Per-field problems, empty for whole-input errors
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SchemaError::Validation { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }
}
