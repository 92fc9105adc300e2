//! CSSGEN Property Model
//!
//! The entities of a property definition document and their linking:
//! - Status, Specification, ValueDef and the codegen option block
//! - Property construction from schema-validated configuration
//! - Shared grammar rules with global fixup
//! - PropertySet: cross-property linking (synonyms, longhands,
//!   related properties, logical property groups), the priority sort,
//!   and the read-only query accessors

mod codegen;
mod error;
mod group;
mod property;
mod set;
mod shared;
mod status;
mod values;

pub use codegen::*;
pub use error::*;
pub use group::*;
pub use property::*;
pub use set::*;
pub use shared::*;
pub use status::*;
pub use values::*;
