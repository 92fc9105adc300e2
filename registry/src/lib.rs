//! CSSGEN Builtin Consumer Registry
//!
//! The static table of builtin value consumers (`<length>`, `<color>`,
//! `<integer>`, ...) and the resolution of reference-term parameters
//! against their parameter categories.

mod builtin;
mod error;
mod table;

pub use builtin::*;
pub use error::*;
pub use table::*;
