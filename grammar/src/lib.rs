//! CSSGEN Grammar Terms
//!
//! The term model for property grammars and its two passes:
//! - Parsing JSON-shaped term definitions into the Term tree
//!   (keywords, references, match-one alternation)
//! - Fixup: shared-rule substitution, match-one flattening and
//!   collapsing, and keyword-list substitution for the internal
//!   `<<values>>` sentinel
//!
//! Fixup is a pure rewrite; running it twice is a no-op.

mod error;
mod parse;
mod rules;
mod term;

pub use error::*;
pub use parse::*;
pub use rules::*;
pub use term::*;
