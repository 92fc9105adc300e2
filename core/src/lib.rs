//! CSSGEN Core Types
//!
//! This crate provides the foundational types used throughout the cssgen
//! pipeline:
//! - Name types (Name, PropertyName, KeywordName) with cached identifier
//!   derivation
//! - Feature flags (FeatureFlags) gating conditional definitions

mod flags;
mod name;

pub use flags::*;
pub use name::*;
