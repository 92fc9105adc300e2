//! CSSGEN Schema Engine
//!
//! Declarative validation for the JSON configuration objects:
//! - Entry definitions (allowed runtime types, defaults, required keys)
//! - Ordered validation: unknown keys, then types, then required presence
//! - Right-biased schema merge so specialized schemas extend general ones
//! - ValidatedObject with typed accessors for entity constructors
//!
//! Every violation is fatal; partially validated objects never survive.

mod entry;
mod error;
mod schema;
mod types;
mod validated;

pub use entry::*;
pub use error::*;
pub use schema::*;
pub use types::*;
pub use validated::*;
