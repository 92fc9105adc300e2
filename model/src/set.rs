//! The linked property set.

use crate::{GroupLogic, ModelError, ModelResult, Property, ResolverKind};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Dense handle into the property set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(usize);

impl PropertyId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One logical property group with its members filled in.
#[derive(Debug, Clone)]
pub struct LogicalGroup {
    pub name: String,
    pub kind: ResolverKind,
    /// Resolver name to member, for the logical side.
    pub logical: IndexMap<String, PropertyId>,
    /// Resolver name to member, for the physical side.
    pub physical: IndexMap<String, PropertyId>,
}

/// The complete set of properties with cross-references resolved to
/// handles. Linking happens once at construction; the accessors are
/// read-only.
#[derive(Debug, Clone)]
pub struct PropertySet {
    records: Vec<Property>,
    by_name: IndexMap<String, PropertyId>,
    synonym_of: Vec<Option<PropertyId>>,
    synonyms: Vec<Vec<PropertyId>>,
    longhands: Vec<Vec<PropertyId>>,
    related: Vec<Option<PropertyId>>,
    groups: IndexMap<String, LogicalGroup>,
    sorted: Vec<PropertyId>,
}

impl PropertySet {
    /// Link the records: synonyms, longhands, related properties and
    /// logical property groups, then compute the priority order.
    pub fn build(records: Vec<Property>) -> ModelResult<PropertySet> {
        let mut by_name = IndexMap::new();
        // Duplicate names in the source document already collapsed at
        // JSON parse time; this catches programmatically assembled
        // record lists.
        for (index, property) in records.iter().enumerate() {
            let previous = by_name.insert(property.name.name().to_string(), PropertyId(index));
            if previous.is_some() {
                return Err(ModelError::DuplicateProperty {
                    name: property.name.name().to_string(),
                });
            }
        }

        let lookup = |name: &str, target: &str, role: &str| -> ModelResult<PropertyId> {
            by_name.get(target).copied().ok_or_else(|| {
                ModelError::unknown_property(name, target, role)
            })
        };

        let mut synonym_of = vec![None; records.len()];
        let mut synonyms = vec![Vec::new(); records.len()];
        for (index, property) in records.iter().enumerate() {
            if let Some(target) = &property.codegen.synonym {
                let target_id = lookup(property.name.name(), target, "synonym")?;
                synonym_of[index] = Some(target_id);
                synonyms[target_id.0].push(PropertyId(index));
            }
        }

        let mut longhands = vec![Vec::new(); records.len()];
        for (index, property) in records.iter().enumerate() {
            for target in &property.codegen.longhands {
                longhands[index].push(lookup(property.name.name(), target, "longhands")?);
            }
        }

        let mut related = vec![None; records.len()];
        for (index, property) in records.iter().enumerate() {
            if let Some(target) = &property.codegen.related_property {
                let target_id = lookup(property.name.name(), target, "related-property")?;
                let reciprocal = records[target_id.0]
                    .codegen
                    .related_property
                    .as_deref();
                if reciprocal != Some(property.name.name()) {
                    return Err(ModelError::not_reciprocal(property.name.name(), target));
                }
                related[index] = Some(target_id);
            }
        }

        let mut groups: IndexMap<String, LogicalGroup> = IndexMap::new();
        for (index, property) in records.iter().enumerate() {
            let membership = match &property.codegen.logical_property_group {
                Some(membership) => membership,
                None => continue,
            };
            let group = groups
                .entry(membership.name.clone())
                .or_insert_with(|| LogicalGroup {
                    name: membership.name.clone(),
                    kind: membership.kind,
                    logical: IndexMap::new(),
                    physical: IndexMap::new(),
                });
            if group.kind != membership.kind {
                return Err(ModelError::ConflictingGroupKinds {
                    group: membership.name.clone(),
                    expected: group.kind.to_string(),
                    actual: membership.kind.to_string(),
                });
            }
            let side = match membership.logic {
                GroupLogic::Logical => &mut group.logical,
                GroupLogic::Physical => &mut group.physical,
            };
            if let Some(first) = side.get(&membership.resolver) {
                return Err(ModelError::DuplicateGroupResolver {
                    group: membership.name.clone(),
                    resolver: membership.resolver.clone(),
                    first: records[first.0].name.name().to_string(),
                    second: property.name.name().to_string(),
                });
            }
            side.insert(membership.resolver.clone(), PropertyId(index));
        }

        let mut sorted: Vec<PropertyId> = (0..records.len()).map(PropertyId).collect();
        sorted.sort_by(|a, b| compare_priority(&records[a.0], &records[b.0]));

        Ok(PropertySet {
            records,
            by_name,
            synonym_of,
            synonyms,
            longhands,
            related,
            groups,
            sorted,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: PropertyId) -> &Property {
        &self.records[id.0]
    }

    pub fn id_of(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Property> {
        self.id_of(name).map(|id| self.get(id))
    }

    /// Every property, in descending priority and name order.
    pub fn all(&self) -> impl Iterator<Item = &Property> {
        self.sorted.iter().map(move |id| &self.records[id.0])
    }

    /// The priority-ordered handles.
    pub fn all_ids(&self) -> impl Iterator<Item = PropertyId> + '_ {
        self.sorted.iter().copied()
    }

    /// Every handle in definition order.
    pub fn ids(&self) -> impl Iterator<Item = PropertyId> {
        (0..self.records.len()).map(PropertyId)
    }

    pub fn shorthands(&self) -> impl Iterator<Item = &Property> {
        self.all().filter(|property| property.is_shorthand())
    }

    pub fn non_shorthands(&self) -> impl Iterator<Item = &Property> {
        self.all().filter(|property| !property.is_shorthand())
    }

    /// The property a synonym canonicalizes to.
    pub fn synonym_target(&self, id: PropertyId) -> Option<&Property> {
        self.synonym_of[id.0].map(|target| self.get(target))
    }

    /// Synonyms pointing at a property.
    pub fn synonyms_of(&self, id: PropertyId) -> impl Iterator<Item = &Property> {
        self.synonyms[id.0].iter().map(move |id| self.get(*id))
    }

    pub fn longhands_of(&self, id: PropertyId) -> impl Iterator<Item = &Property> {
        self.longhands[id.0].iter().map(move |id| self.get(*id))
    }

    pub fn related_of(&self, id: PropertyId) -> Option<&Property> {
        self.related[id.0].map(|target| self.get(target))
    }

    pub fn logical_property_groups(&self) -> &IndexMap<String, LogicalGroup> {
        &self.groups
    }

    /// Group members, sorted by group name, logical before physical,
    /// then property name.
    pub fn in_logical_property_groups(&self) -> Vec<&Property> {
        let mut group_names: Vec<&String> = self.groups.keys().collect();
        group_names.sort();

        let mut members = Vec::new();
        for name in group_names {
            let group = &self.groups[name.as_str()];
            for side in [&group.logical, &group.physical] {
                let mut side_members: Vec<&Property> =
                    side.values().map(|id| self.get(*id)).collect();
                side_members.sort_by(|a, b| a.name.name().cmp(b.name.name()));
                members.extend(side_members);
            }
        }
        members
    }

    /// The logical group members that are writing-mode relative, sorted
    /// by group name then property name.
    pub fn direction_aware(&self) -> Vec<&Property> {
        let mut group_names: Vec<&String> = self.groups.keys().collect();
        group_names.sort();

        let mut members = Vec::new();
        for name in group_names {
            let group = &self.groups[name.as_str()];
            let mut side_members: Vec<&Property> =
                group.logical.values().map(|id| self.get(*id)).collect();
            side_members.sort_by(|a, b| a.name.name().cmp(b.name.name()));
            members.extend(side_members);
        }
        members
    }

    /// Every settings flag used by a property, deduplicated and sorted.
    pub fn settings_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = self
            .records
            .iter()
            .filter_map(|property| property.codegen.settings_flag.clone())
            .collect();
        flags.sort();
        flags.dedup();
        flags
    }

    pub fn with_settings_flag<'a>(&'a self, flag: &'a str) -> impl Iterator<Item = &'a Property> {
        self.all()
            .filter(move |property| property.codegen.settings_flag.as_deref() == Some(flag))
    }
}

/// Descending priority, then name with prefixed properties last.
fn compare_priority(a: &Property, b: &Property) -> Ordering {
    let key = |p: &Property| {
        (
            p.is_shorthand(),
            !p.codegen.top_priority,
            !p.codegen.high_priority,
            p.is_deferred(),
            p.codegen.sink_priority,
        )
    };
    key(a)
        .cmp(&key(b))
        .then_with(|| compare_prefixed_last(a, b))
}

fn compare_prefixed_last(a: &Property, b: &Property) -> Ordering {
    a.is_prefixed()
        .cmp(&b.is_prefixed())
        .then_with(|| a.name.name().cmp(b.name.name()))
}
