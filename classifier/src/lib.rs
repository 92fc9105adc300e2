//! CSSGEN Consumer Classifier
//!
//! Maps every property to one of five parser-generation strategies:
//! skip, custom parser call, keyword-only fast path, direct builtin
//! consumer, or a generated block plan. Also plans consumers for
//! exported shared grammar rules.
//!
//! Classification is a pure function of the resolved model; identical
//! input always yields identical strategies and orderings.

mod classify;
mod error;
mod fastpath;
mod plan;
mod strategy;

pub use classify::*;
pub use error::*;
pub use fastpath::*;
pub use plan::*;
pub use strategy::*;
