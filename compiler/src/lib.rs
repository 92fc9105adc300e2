//! CSSGEN Compiler
//!
//! The top-level pipeline: validate the property definition document,
//! parse and fix the shared grammar rules, build and link the property
//! set, classify every property, and assemble the compiled model.
//!
//! The pipeline is single-threaded and side-effect free: one document
//! in, one `CompiledModel` out.

mod error;
mod model;
mod pipeline;

pub use error::*;
pub use model::*;
pub use pipeline::*;
