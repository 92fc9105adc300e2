//! Model construction and linking error types.

use cssgen_grammar::GrammarError;
use cssgen_schema::SchemaError;
use thiserror::Error;

/// Errors that can occur while building the property model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// A codegen option combination the model forbids.
    #[error("Invalid configuration for '{name}': {detail}")]
    InvalidOption { name: String, detail: String },

    /// A cross-reference naming a property that does not exist.
    #[error("Property '{name}' references unknown property '{target}' in '{role}'")]
    UnknownProperty {
        name: String,
        target: String,
        role: String,
    },

    /// Two properties declared with the same name.
    #[error("Duplicate property name: {name}")]
    DuplicateProperty { name: String },

    /// One-sided related-property declarations.
    #[error("Related property of '{name}' is not reciprocal: '{related}'")]
    NotReciprocal { name: String, related: String },

    /// A logical property group resolver outside the resolver tables.
    #[error("Unknown resolver '{resolver}' for logical property group at '{path}'")]
    UnknownResolver { path: String, resolver: String },

    /// Members of one group disagreeing on the resolver kind.
    #[error("Logical property group '{group}' mixes resolver kinds: {expected} and {actual}")]
    ConflictingGroupKinds {
        group: String,
        expected: String,
        actual: String,
    },

    /// Two properties claiming the same resolver slot of a group.
    #[error("Logical property group '{group}' has two properties for resolver '{resolver}': '{first}' and '{second}'")]
    DuplicateGroupResolver {
        group: String,
        resolver: String,
        first: String,
        second: String,
    },

    /// A `<<values>>` sentinel left in a grammar with no declared values.
    #[error("Grammar of '{name}' references <<values>> but no values are declared")]
    UnresolvedValuesReference { name: String },

    /// A shared rule alias on a grammar that is not a single keyword.
    #[error("Shared grammar rule '{rule}' uses 'aliased-to' but its grammar is not a single keyword")]
    AliasRequiresSingleKeyword { rule: String },
}

impl ModelError {
    pub fn invalid_option(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn unknown_property(
        name: impl Into<String>,
        target: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self::UnknownProperty {
            name: name.into(),
            target: target.into(),
            role: role.into(),
        }
    }

    pub fn not_reciprocal(name: impl Into<String>, related: impl Into<String>) -> Self {
        Self::NotReciprocal {
            name: name.into(),
            related: related.into(),
        }
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
