//! Object schemas and the validation pass.

use crate::{ConfigType, SchemaEntry, SchemaError, SchemaResult, ValidatedObject};
use indexmap::IndexMap;
use serde_json::Value;

/// An ordered set of schema entries describing one object shape.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: IndexMap<String, SchemaEntry>,
}

impl Schema {
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.key().to_string(), entry))
                .collect(),
        }
    }

    pub fn entry(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.get(key)
    }

    /// Right-biased union: entries of `specialized` override entries of
    /// `self` with the same key, extra entries are appended.
    pub fn merge(&self, specialized: &Schema) -> Schema {
        let mut entries = self.entries.clone();
        for (key, entry) in &specialized.entries {
            entries.insert(key.clone(), entry.clone());
        }
        Schema { entries }
    }

    /// Validate an object against this schema.
    ///
    /// Checks run in order: unknown keys, runtime types, required
    /// presence. Absent optional keys are filled with their defaults.
    pub fn validate(&self, path: &str, value: &Value) -> SchemaResult<ValidatedObject> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::not_an_object(path, ConfigType::name_of(value)))?;

        for key in object.keys() {
            if !self.entries.contains_key(key) {
                return Err(SchemaError::unknown_key(path, key));
            }
        }

        for (key, entry) in &self.entries {
            if let Some(present) = object.get(key) {
                if !entry.accepts(present) {
                    return Err(SchemaError::invalid_type(
                        path,
                        key,
                        entry.allowed_names(),
                        ConfigType::name_of(present),
                    ));
                }
            }
        }

        for (key, entry) in &self.entries {
            if entry.is_required() && !object.contains_key(key) {
                return Err(SchemaError::missing_required(path, key));
            }
        }

        let mut values = IndexMap::new();
        for (key, entry) in &self.entries {
            match object.get(key) {
                Some(present) => {
                    values.insert(key.clone(), present.clone());
                }
                None => {
                    if let Some(default) = entry.default() {
                        values.insert(key.clone(), default.clone());
                    }
                }
            }
        }

        Ok(ValidatedObject::new(path.to_string(), values))
    }
}
