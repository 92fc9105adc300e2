//! Property construction.

use crate::{
    CodegenOptions, CodegenOutcome, ModelError, ModelResult, Specification, Status, ValueDef,
};
use cssgen_core::{FeatureFlags, PropertyName};
use cssgen_grammar::{Grammar, KeywordTerm, RuleIndex};
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;

/// One style property with its resolved grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: PropertyName,
    pub animatable: bool,
    pub inherited: bool,
    pub initial: Option<String>,
    pub comment: Option<String>,
    pub specification: Option<Specification>,
    pub status: Option<Status>,
    pub values: Vec<ValueDef>,
    pub codegen: CodegenOptions,
    pub grammar: Option<Grammar>,
}

fn property_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("animatable", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new(
            "codegen-properties",
            &[ConfigType::Object, ConfigType::Array],
        ),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("inherited", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("initial", &[ConfigType::String]),
        SchemaEntry::new("specification", &[ConfigType::Object]),
        SchemaEntry::new("status", &[ConfigType::String, ConfigType::Object]),
        SchemaEntry::new("values", &[ConfigType::Array]),
    ])
}

impl Property {
    /// Build one property from its configuration.
    ///
    /// Returns `Ok(None)` when the property is excluded: the codegen
    /// block's `enable-if` is unsatisfied or `skip-codegen` is set.
    pub fn from_config(
        flags: &FeatureFlags,
        rules: &RuleIndex,
        path: &str,
        name: &str,
        value: &Value,
    ) -> ModelResult<Option<Property>> {
        let validated = property_schema().validate(path, value)?;

        let empty_options = Value::Object(serde_json::Map::new());
        let raw_codegen = validated.get("codegen-properties").unwrap_or(&empty_options);
        let codegen_path = format!("{}.codegen-properties", path);
        let (property_name, codegen) =
            match CodegenOptions::from_config(flags, &codegen_path, name, raw_codegen)? {
                CodegenOutcome::Skipped => return Ok(None),
                CodegenOutcome::Built(inner) => *inner,
            };

        let specification = match validated.get("specification") {
            Some(raw) => Some(Specification::from_config(path, raw)?),
            None => None,
        };
        let status = match validated.get("status") {
            Some(raw) => Some(Status::from_config(path, raw)?),
            None => None,
        };

        let values = match validated.get_array("values") {
            Some(raw) => ValueDef::parse_list(flags, &format!("{}.values", path), raw)?,
            None => Vec::new(),
        };

        let grammar = Self::resolve_grammar(rules, name, &codegen, &values)?;

        Ok(Some(Property {
            name: property_name,
            animatable: validated.get_bool("animatable") == Some(true),
            inherited: validated.get_bool("inherited") == Some(true),
            initial: validated.get_string("initial"),
            comment: validated.get_string("comment"),
            specification,
            status,
            values,
            codegen,
            grammar,
        }))
    }

    /// Resolve the property's grammar: fix the declared grammar against
    /// the shared rules and substitute declared values for the
    /// `<<values>>` sentinel, or derive the grammar from the values
    /// alone.
    fn resolve_grammar(
        rules: &RuleIndex,
        name: &str,
        codegen: &CodegenOptions,
        values: &[ValueDef],
    ) -> ModelResult<Option<Grammar>> {
        let keywords: Vec<KeywordTerm> =
            values.iter().map(|value| value.keyword.clone()).collect();

        if let Some(raw) = &codegen.parser_grammar {
            let mut fixed = raw.fixed(rules);
            if fixed.contains_values_sentinel() {
                if keywords.is_empty() {
                    return Err(ModelError::UnresolvedValuesReference {
                        name: name.to_string(),
                    });
                }
                fixed = fixed.substituted_values(&keywords);
            }
            return Ok(Some(Grammar::new(fixed)));
        }

        let parses_itself = codegen.parser_function.is_some()
            || codegen.skip_parser
            || codegen.is_shorthand();
        if !keywords.is_empty() && !parses_itself {
            return Ok(Some(Grammar::from_values(&keywords)));
        }

        Ok(None)
    }

    pub fn is_shorthand(&self) -> bool {
        self.codegen.is_shorthand()
    }

    pub fn is_deferred(&self) -> bool {
        self.codegen.is_deferred()
    }

    pub fn is_prefixed(&self) -> bool {
        self.name.is_prefixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssgen_grammar::Term;
    use serde_json::json;

    fn build(value: Value) -> ModelResult<Option<Property>> {
        Property::from_config(
            &FeatureFlags::new(),
            &RuleIndex::empty(),
            "$properties.test",
            "test-property",
            &value,
        )
    }

    #[test]
    fn test_values_only_property_derives_grammar() {
        let property = build(json!({"values": ["auto", "none"]})).unwrap().unwrap();
        let grammar = property.grammar.as_ref().unwrap();
        assert_eq!(grammar.root.keyword_terms().len(), 2);
        assert_eq!(property.values.len(), 2);
    }

    #[test]
    fn test_declared_grammar_wins() {
        let property = build(json!({
            "codegen-properties": {"parser-grammar": "<length [0,inf]>"}
        }))
        .unwrap()
        .unwrap();
        let grammar = property.grammar.as_ref().unwrap();
        assert!(matches!(grammar.root, Term::Reference(_)));
    }

    #[test]
    fn test_values_sentinel_substitution() {
        let property = build(json!({
            "values": ["auto", "none"],
            "codegen-properties": {"parser-grammar": ["<<values>>", "<length>"]}
        }))
        .unwrap()
        .unwrap();
        let grammar = property.grammar.as_ref().unwrap();
        assert!(!grammar.root.contains_values_sentinel());
        assert_eq!(grammar.root.keyword_terms().len(), 2);
        assert_eq!(grammar.root.reference_terms().len(), 1);
    }

    #[test]
    fn test_values_sentinel_without_values_is_an_error() {
        let err = build(json!({
            "codegen-properties": {"parser-grammar": "<<values>>"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("<<values>>"));
    }

    #[test]
    fn test_shorthand_has_no_grammar() {
        let property = build(json!({
            "codegen-properties": {"longhands": ["a", "b"]}
        }))
        .unwrap()
        .unwrap();
        assert!(property.grammar.is_none());
        assert!(property.is_shorthand());
    }

    #[test]
    fn test_parser_function_suppresses_value_grammar() {
        let property = build(json!({
            "values": ["auto"],
            "codegen-properties": {"parser-function": "consumeTestProperty"}
        }))
        .unwrap()
        .unwrap();
        assert!(property.grammar.is_none());
    }

    #[test]
    fn test_skipped_property() {
        let property = build(json!({
            "codegen-properties": {"skip-codegen": true}
        }))
        .unwrap();
        assert!(property.is_none());
    }
}
