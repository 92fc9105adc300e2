//! Shared grammar rules.

use crate::{ModelError, ModelResult, Specification, Status};
use cssgen_core::{FeatureFlags, KeywordName};
use cssgen_grammar::{parse_term, RuleIndex, Term};
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// One shared grammar rule, named in reference form (e.g. `<image>`).
#[derive(Debug, Clone, PartialEq)]
pub struct SharedRule {
    pub name: String,
    /// The fixed root; references to other rules are already inlined.
    pub root: Term,
    /// Exported rules get a dedicated consumer of their own.
    pub exported: bool,
    /// Keyword the rule's single keyword canonicalizes to.
    pub aliased_to: Option<KeywordName>,
    pub comment: Option<String>,
    pub specification: Option<Specification>,
    pub status: Option<Status>,
}

fn rule_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new(
            "grammar",
            &[ConfigType::String, ConfigType::Array, ConfigType::Object],
        )
        .required(),
        SchemaEntry::new("aliased-to", &[ConfigType::String]),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("enable-if", &[ConfigType::String]),
        SchemaEntry::new("exported", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("specification", &[ConfigType::Object]),
        SchemaEntry::new("status", &[ConfigType::String, ConfigType::Object]),
    ])
}

/// The shared grammar rules of a document, fixed against each other.
#[derive(Debug, Clone, Default)]
pub struct SharedRules {
    rules: IndexMap<String, SharedRule>,
    index: RuleIndex,
}

impl SharedRules {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the `shared-grammar-rules` section and fix every rule.
    pub fn from_config(
        flags: &FeatureFlags,
        path: &str,
        value: &Value,
    ) -> ModelResult<SharedRules> {
        let object = value.as_object().ok_or_else(|| {
            cssgen_schema::SchemaError::not_an_object(
                path,
                cssgen_schema::ConfigType::name_of(value),
            )
        })?;

        struct PendingRule {
            exported: bool,
            aliased_to: Option<String>,
            comment: Option<String>,
            specification: Option<Specification>,
            status: Option<Status>,
        }

        let mut raw_roots = IndexMap::new();
        let mut pending: IndexMap<String, PendingRule> = IndexMap::new();

        for (name, config) in object {
            let rule_path = format!("{}.{}", path, name);
            let validated = rule_schema().validate(&rule_path, config)?;

            if let Some(condition) = validated.get_str("enable-if") {
                if !flags.is_enabled(condition) {
                    debug!(path = %rule_path, condition = %condition, "rule disabled, dropping");
                    continue;
                }
            }

            let grammar = validated.get("grammar").expect("required by schema");
            let root = match parse_term(flags, &rule_path, grammar)? {
                Some(root) => root,
                None => {
                    debug!(path = %rule_path, "rule grammar fully disabled, dropping");
                    continue;
                }
            };

            let specification = match validated.get("specification") {
                Some(raw) => Some(Specification::from_config(&rule_path, raw)?),
                None => None,
            };
            let status = match validated.get("status") {
                Some(raw) => Some(Status::from_config(&rule_path, raw)?),
                None => None,
            };

            raw_roots.insert(name.clone(), root);
            pending.insert(
                name.clone(),
                PendingRule {
                    exported: validated.get_bool("exported") == Some(true),
                    aliased_to: validated.get_string("aliased-to"),
                    comment: validated.get_string("comment"),
                    specification,
                    status,
                },
            );
        }

        let index = RuleIndex::resolve(raw_roots)?;

        let mut rules = IndexMap::new();
        for (name, details) in pending {
            let root = index
                .lookup(&name)
                .cloned()
                .expect("every pending rule was resolved");

            let aliased_to = match details.aliased_to {
                Some(alias) => {
                    if !matches!(root, Term::Keyword(_)) {
                        return Err(ModelError::AliasRequiresSingleKeyword { rule: name });
                    }
                    Some(KeywordName::new(alias))
                }
                None => None,
            };

            rules.insert(
                name.clone(),
                SharedRule {
                    name,
                    root,
                    exported: details.exported,
                    aliased_to,
                    comment: details.comment,
                    specification: details.specification,
                    status: details.status,
                },
            );
        }

        Ok(SharedRules { rules, index })
    }

    /// The fixed lookup table used for property grammar fixup.
    pub fn index(&self) -> &RuleIndex {
        &self.index
    }

    pub fn get(&self, name: &str) -> Option<&SharedRule> {
        self.rules.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedRule> {
        self.rules.values()
    }

    pub fn exported(&self) -> impl Iterator<Item = &SharedRule> {
        self.rules.values().filter(|rule| rule.exported)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
