//! Declared keyword values and longhand references.

use crate::{ModelResult, Status};
use cssgen_core::FeatureFlags;
use cssgen_grammar::KeywordTerm;
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;
use tracing::debug;

/// One declared keyword value of a property.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDef {
    pub keyword: KeywordTerm,
    pub status: Option<Status>,
    pub url: Option<String>,
    pub comment: Option<String>,
}

fn value_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("value", &[ConfigType::String]).required(),
        SchemaEntry::new("aliased-to", &[ConfigType::String]),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("enable-if", &[ConfigType::String]),
        SchemaEntry::new("settings-flag", &[ConfigType::String]),
        SchemaEntry::new("status", &[ConfigType::String, ConfigType::Object]),
        SchemaEntry::new("url", &[ConfigType::String]),
    ])
}

impl ValueDef {
    /// Parse one value definition.
    ///
    /// Returns `Ok(None)` when the value is excluded: an unsatisfied
    /// `enable-if` or a skipped status. Exclusions are logged, never
    /// errors.
    pub fn from_config(
        flags: &FeatureFlags,
        path: &str,
        value: &Value,
    ) -> ModelResult<Option<ValueDef>> {
        if let Some(text) = value.as_str() {
            return Ok(Some(ValueDef {
                keyword: KeywordTerm::new(text),
                status: None,
                url: None,
                comment: None,
            }));
        }

        let validated = value_schema().validate(path, value)?;

        if let Some(condition) = validated.get_str("enable-if") {
            if !flags.is_enabled(condition) {
                debug!(path = %path, condition = %condition, "value disabled, dropping");
                return Ok(None);
            }
        }

        let status = match validated.get("status") {
            Some(raw) => Some(Status::from_config(path, raw)?),
            None => None,
        };
        if let Some(status) = &status {
            if status.is_skipped() {
                debug!(path = %path, status = %status.status, "value status excludes it, dropping");
                return Ok(None);
            }
        }

        let name = validated.get_str("value").expect("required by schema");
        let keyword = KeywordTerm {
            name: name.into(),
            aliased_to: validated.get_str("aliased-to").map(Into::into),
            settings_flag: validated.get_string("settings-flag"),
            internal: status.as_ref().is_some_and(Status::is_internal),
        };

        Ok(Some(ValueDef {
            keyword,
            status,
            url: validated.get_string("url"),
            comment: validated.get_string("comment"),
        }))
    }

    /// Parse a property's `values` array, dropping exclusions.
    pub fn parse_list(
        flags: &FeatureFlags,
        path: &str,
        values: &[Value],
    ) -> ModelResult<Vec<ValueDef>> {
        let mut defs = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let value_path = format!("{}[{}]", path, index);
            if let Some(def) = ValueDef::from_config(flags, &value_path, value)? {
                defs.push(def);
            }
        }
        Ok(defs)
    }
}

fn longhand_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("value", &[ConfigType::String]).required(),
        SchemaEntry::new("enable-if", &[ConfigType::String]),
    ])
}

/// Parse a shorthand's `longhands` array into longhand names, dropping
/// entries whose `enable-if` is unsatisfied.
pub fn parse_longhands(
    flags: &FeatureFlags,
    path: &str,
    values: &[Value],
) -> ModelResult<Vec<String>> {
    let mut names = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let entry_path = format!("{}[{}]", path, index);
        if let Some(text) = value.as_str() {
            names.push(text.to_string());
            continue;
        }
        let validated = longhand_schema().validate(&entry_path, value)?;
        if let Some(condition) = validated.get_str("enable-if") {
            if !flags.is_enabled(condition) {
                debug!(path = %entry_path, condition = %condition, "longhand disabled, dropping");
                continue;
            }
        }
        names.push(validated.get_string("value").expect("required by schema"));
    }
    Ok(names)
}
