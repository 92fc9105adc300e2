//! Grammar parsing and fixup error types.

use cssgen_registry::RegistryError;
use cssgen_schema::SchemaError;
use thiserror::Error;

/// Errors that can occur while parsing or fixing up grammar terms.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A term definition with an unusable shape.
    #[error("Invalid term at '{path}': {detail}")]
    InvalidTerm { path: String, detail: String },

    /// A non-string value without an explicit kind.
    #[error("Term at '{path}' has a non-string value and needs an explicit 'kind'")]
    MissingKind { path: String },

    /// A kind this model does not define.
    #[error("Unknown term kind '{kind}' at '{path}'")]
    UnknownKind { path: String, kind: String },

    /// Two shared rules referencing each other.
    #[error("Reference cycle between shared grammar rules involving '{name}'")]
    RuleCycle { name: String },
}

impl GrammarError {
    pub fn invalid_term(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidTerm {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub fn missing_kind(path: impl Into<String>) -> Self {
        Self::MissingKind { path: path.into() }
    }

    pub fn unknown_kind(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownKind {
            path: path.into(),
            kind: kind.into(),
        }
    }

    pub fn rule_cycle(name: impl Into<String>) -> Self {
        Self::RuleCycle { name: name.into() }
    }
}

/// Result type for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;
