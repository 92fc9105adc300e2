//! Schema validation error types.

use thiserror::Error;

/// Errors that can occur during schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A value expected to be an object was something else.
    #[error("Expected an object at '{path}', got {actual}")]
    NotAnObject { path: String, actual: String },

    /// A key not declared by the schema.
    #[error("Unknown key '{key}' at '{path}'")]
    UnknownKey { path: String, key: String },

    /// A value whose runtime type is not in the entry's allowed set.
    #[error("Invalid type for '{key}' at '{path}': expected {expected}, got {actual}")]
    InvalidType {
        path: String,
        key: String,
        expected: String,
        actual: String,
    },

    /// A required key that is absent.
    #[error("Missing required key '{key}' at '{path}'")]
    MissingRequired { path: String, key: String },

    /// A value with a valid type but an unacceptable shape.
    #[error("Invalid value for '{key}' at '{path}': {detail}")]
    InvalidValue {
        path: String,
        key: String,
        detail: String,
    },
}

impl SchemaError {
    pub fn not_an_object(path: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::NotAnObject {
            path: path.into(),
            actual: actual.into(),
        }
    }

    pub fn unknown_key(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn invalid_type(
        path: impl Into<String>,
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            path: path.into(),
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_required(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingRequired {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn invalid_value(
        path: impl Into<String>,
        key: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            path: path.into(),
            key: key.into(),
            detail: detail.into(),
        }
    }
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
