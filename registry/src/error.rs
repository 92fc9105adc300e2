//! Registry resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving builtin consumer parameters.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A parameter token no category of the builtin recognizes.
    #[error("Unknown parameter '{token}' passed to <{builtin}>. Supported parameters are {supported}")]
    UnknownParameter {
        builtin: String,
        token: String,
        supported: String,
    },

    /// Two tokens mapping to the same category.
    #[error("More than one parameter of type '{category}' passed to <{builtin}>, pick one: {first}, {second}")]
    DuplicateCategory {
        builtin: String,
        category: String,
        first: String,
        second: String,
    },

    /// A required category with no token supplied.
    #[error("Required parameter of type '{category}' not passed to <{builtin}>. Pick one of {choices}")]
    MissingRequired {
        builtin: String,
        category: String,
        choices: String,
    },
}

impl RegistryError {
    pub fn unknown_parameter(
        builtin: impl Into<String>,
        token: impl Into<String>,
        supported: impl Into<String>,
    ) -> Self {
        Self::UnknownParameter {
            builtin: builtin.into(),
            token: token.into(),
            supported: supported.into(),
        }
    }

    pub fn duplicate_category(
        builtin: impl Into<String>,
        category: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateCategory {
            builtin: builtin.into(),
            category: category.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn missing_required(
        builtin: impl Into<String>,
        category: impl Into<String>,
        choices: impl Into<String>,
    ) -> Self {
        Self::MissingRequired {
            builtin: builtin.into(),
            category: category.into(),
            choices: choices.into(),
        }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
