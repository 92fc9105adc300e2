//! Compiler error type.

use cssgen_classifier::ClassifyError;
use cssgen_grammar::GrammarError;
use cssgen_model::ModelError;
use cssgen_registry::RegistryError;
use cssgen_schema::SchemaError;
use thiserror::Error;

/// Any error raised by a pipeline stage.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
