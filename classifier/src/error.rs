//! Classification error types.

use thiserror::Error;

/// Errors that can occur during classification and planning.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A property with nothing to generate a parser from.
    #[error("Property '{name}' has neither a grammar nor a parser-function")]
    MissingGrammar { name: String },

    /// A reference that resolved to neither a builtin nor a shared rule.
    #[error("Unresolved reference {reference} in the grammar of '{name}'")]
    UnresolvedReference { name: String, reference: String },
}

impl ClassifyError {
    pub fn missing_grammar(name: impl Into<String>) -> Self {
        Self::MissingGrammar { name: name.into() }
    }

    pub fn unresolved_reference(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Result type for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;
