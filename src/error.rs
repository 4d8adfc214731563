// Crate error type, renderable by an external HTTP layer
use serde_json::{json, Value};
use thiserror::Error;

use crate::record::RecordError;
use crate::schema::SchemaError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Schema(SchemaError::Validation { .. }) => 422,
            Error::Schema(_) => 400,
            Error::Record(_) => 400,
            Error::Json(e) if e.is_syntax() || e.is_eof() => 400,
            Error::Json(_) => 500,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Schema(SchemaError::Validation { .. }) => "VALIDATION_ERROR",
            Error::Schema(SchemaError::SystemField(_)) => "SYSTEM_FIELD",
            Error::Schema(SchemaError::NotAnObject) => "INVALID_JSON",
            Error::Schema(SchemaError::EmptyPatch) => "EMPTY_PATCH",
            Error::Schema(SchemaError::InvalidQuery(_)) => "INVALID_QUERY",
            Error::Record(RecordError::SystemFieldNotAllowed(_)) => "SYSTEM_FIELD",
            Error::Record(RecordError::InvalidJson(_)) => "INVALID_JSON",
            Error::Json(_) if self.status_code() == 400 => "INVALID_JSON",
            Error::Json(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let message = match self {
            // Serialization internals are not for clients
            Error::Json(e) if !(e.is_syntax() || e.is_eof()) => {
                tracing::error!("JSON serialization error: {}", e);
                "Failed to format response".to_string()
            }
            other => other.to_string(),
        };

        let mut response = json!({
            "error": true,
            "message": message,
            "code": self.error_code()
        });

        if let Error::Schema(SchemaError::Validation { field_errors, .. }) = self {
            response["field_errors"] = json!(field_errors);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldErrors;

    #[test]
    fn test_validation_error_renders_field_errors() {
        let mut fields = FieldErrors::new();
        fields.insert("name".to_string(), "This field is required".to_string());
        let err: Error = SchemaError::Validation {
            message: "Invalid organization".to_string(),
            field_errors: fields,
        }
        .into();

        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let body = err.to_json();
        assert_eq!(body["message"], "Invalid organization");
        assert_eq!(body["field_errors"]["name"], "This field is required");
    }

    #[test]
    fn test_input_errors_are_bad_requests() {
        let err: Error = RecordError::SystemFieldNotAllowed("id").into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "SYSTEM_FIELD");

        let err: Error = SchemaError::EmptyPatch.into();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_json().get("field_errors").is_none());

        let parse = serde_json::from_str::<Value>("{").unwrap_err();
        let err: Error = parse.into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_JSON");
    }
}
