//! The compilation pipeline.

use crate::{CompileResult, CompiledModel};
use cssgen_classifier::{classify, plan_shared_rule, ParserStrategy};
use cssgen_core::FeatureFlags;
use cssgen_model::{Property, PropertySet, SharedRules};
use cssgen_schema::{ConfigType, Schema, SchemaEntry, SchemaError};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

fn document_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("categories", &[ConfigType::Object]).required(),
        SchemaEntry::new("instructions", &[ConfigType::Array]).required(),
        SchemaEntry::new("properties", &[ConfigType::Object]).required(),
        SchemaEntry::new("shared-grammar-rules", &[ConfigType::Object]).required(),
    ])
}

/// Compile a property definition document.
///
/// Stages: top-level validation, shared rule fixup, property
/// construction, cross-property linking, classification. Any invariant
/// violation aborts the run.
pub fn compile(document: &Value, flags: &FeatureFlags) -> CompileResult<CompiledModel> {
    let validated = document_schema().validate("$", document)?;

    let categories = validated
        .get_object("categories")
        .expect("required by schema")
        .clone();
    for (name, value) in &categories {
        if !value.is_object() {
            return Err(SchemaError::invalid_value(
                "$categories",
                name,
                format!("expected an object, got {}", ConfigType::name_of(value)),
            )
            .into());
        }
    }

    let raw_instructions = validated
        .get_array("instructions")
        .expect("required by schema");
    let mut instructions = Vec::with_capacity(raw_instructions.len());
    for (index, value) in raw_instructions.iter().enumerate() {
        match value.as_str() {
            Some(text) => instructions.push(text.to_string()),
            None => {
                return Err(SchemaError::invalid_value(
                    "$instructions",
                    index.to_string(),
                    format!("expected a string, got {}", ConfigType::name_of(value)),
                )
                .into())
            }
        }
    }

    let shared_rules = SharedRules::from_config(
        flags,
        "$shared-grammar-rules",
        validated
            .get("shared-grammar-rules")
            .expect("required by schema"),
    )?;

    let raw_properties = validated
        .get_object("properties")
        .expect("required by schema");
    let mut records = Vec::with_capacity(raw_properties.len());
    for (name, config) in raw_properties {
        let path = format!("$properties.{}", name);
        if let Some(property) =
            Property::from_config(flags, shared_rules.index(), &path, name, config)?
        {
            records.push(property);
        }
    }

    let properties = PropertySet::build(records)?;

    let mut strategies: Vec<ParserStrategy> = Vec::with_capacity(properties.len());
    for id in properties.ids() {
        strategies.push(classify(properties.get(id))?);
    }

    let mut shared_rule_plans = IndexMap::new();
    for rule in shared_rules.iter() {
        if let Some(plan) = plan_shared_rule(rule)? {
            shared_rule_plans.insert(rule.name.clone(), plan);
        }
    }

    debug!(
        properties = properties.len(),
        shared_rules = shared_rules.len(),
        "compiled model assembled"
    );

    Ok(CompiledModel::new(
        properties,
        strategies,
        shared_rules,
        shared_rule_plans,
        categories,
        instructions,
    ))
}
