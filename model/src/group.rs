//! Logical property groups.
//!
//! A logical property group ties logical properties (e.g.
//! `margin-block-start`) to their physical counterparts (`margin-top`)
//! through a resolver. The resolver tables for the two logics share
//! their ordering, so a logical resolver maps to the physical one at
//! the same position.

use crate::{ModelError, ModelResult};
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;
use std::fmt;

/// Whether a group member is the writing-mode-relative or the physical
/// side of the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLogic {
    Logical,
    Physical,
}

impl fmt::Display for GroupLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLogic::Logical => write!(f, "logical"),
            GroupLogic::Physical => write!(f, "physical"),
        }
    }
}

/// The shape of a group's resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Axis,
    Side,
    Corner,
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverKind::Axis => write!(f, "axis"),
            ResolverKind::Side => write!(f, "side"),
            ResolverKind::Corner => write!(f, "corner"),
        }
    }
}

const LOGICAL_AXES: &[&str] = &["inline", "block"];
const LOGICAL_SIDES: &[&str] = &["block-start", "inline-end", "block-end", "inline-start"];
const LOGICAL_CORNERS: &[&str] = &["start-start", "start-end", "end-start", "end-end"];
const PHYSICAL_AXES: &[&str] = &["horizontal", "vertical"];
const PHYSICAL_SIDES: &[&str] = &["top", "right", "bottom", "left"];
const PHYSICAL_CORNERS: &[&str] = &["top-left", "top-right", "bottom-right", "bottom-left"];

/// The resolver names for one logic and kind, in canonical order.
pub fn resolvers_for(logic: GroupLogic, kind: ResolverKind) -> &'static [&'static str] {
    match (logic, kind) {
        (GroupLogic::Logical, ResolverKind::Axis) => LOGICAL_AXES,
        (GroupLogic::Logical, ResolverKind::Side) => LOGICAL_SIDES,
        (GroupLogic::Logical, ResolverKind::Corner) => LOGICAL_CORNERS,
        (GroupLogic::Physical, ResolverKind::Axis) => PHYSICAL_AXES,
        (GroupLogic::Physical, ResolverKind::Side) => PHYSICAL_SIDES,
        (GroupLogic::Physical, ResolverKind::Corner) => PHYSICAL_CORNERS,
    }
}

fn classify_resolver(resolver: &str) -> Option<(GroupLogic, ResolverKind)> {
    for logic in [GroupLogic::Logical, GroupLogic::Physical] {
        for kind in [ResolverKind::Axis, ResolverKind::Side, ResolverKind::Corner] {
            if resolvers_for(logic, kind).contains(&resolver) {
                return Some((logic, kind));
            }
        }
    }
    None
}

/// A property's membership in a logical property group.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalPropertyGroup {
    pub name: String,
    pub resolver: String,
    pub logic: GroupLogic,
    pub kind: ResolverKind,
}

fn group_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("name", &[ConfigType::String]).required(),
        SchemaEntry::new("resolver", &[ConfigType::String]).required(),
    ])
}

impl LogicalPropertyGroup {
    pub fn from_config(path: &str, value: &Value) -> ModelResult<LogicalPropertyGroup> {
        let validated = group_schema().validate(path, value)?;
        let name = validated.get_string("name").expect("required by schema");
        let resolver = validated.get_string("resolver").expect("required by schema");
        let (logic, kind) = classify_resolver(&resolver).ok_or_else(|| {
            ModelError::UnknownResolver {
                path: path.to_string(),
                resolver: resolver.clone(),
            }
        })?;
        Ok(LogicalPropertyGroup {
            name,
            resolver,
            logic,
            kind,
        })
    }

    /// The position of this resolver in its table; the counterpart
    /// resolver of the other logic sits at the same position.
    pub fn resolver_index(&self) -> usize {
        resolvers_for(self.logic, self.kind)
            .iter()
            .position(|r| *r == self.resolver)
            .expect("resolver validated at construction")
    }
}
