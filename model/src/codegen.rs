//! The codegen option block of a property.

use crate::{LogicalPropertyGroup, ModelError, ModelResult, Status};
use bitflags::bitflags;
use cssgen_core::{FeatureFlags, PropertyName};
use cssgen_grammar::{parse_term, Term};
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;
use tracing::debug;

bitflags! {
    /// Which parts of a property's style application are hand-written.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CustomBehavior: u8 {
        const INITIAL = 1 << 0;
        const INHERIT = 1 << 1;
        const VALUE = 1 << 2;
    }
}

impl CustomBehavior {
    /// Parse the `custom` option: `|`-separated behavior names, or
    /// `All` for every behavior.
    pub fn parse(name: &str, text: &str) -> ModelResult<CustomBehavior> {
        if text == "All" {
            return Ok(CustomBehavior::all());
        }
        let mut behavior = CustomBehavior::empty();
        for part in text.split('|').filter(|part| !part.is_empty()) {
            behavior |= match part {
                "Initial" => CustomBehavior::INITIAL,
                "Inherit" => CustomBehavior::INHERIT,
                "Value" => CustomBehavior::VALUE,
                other => {
                    return Err(ModelError::invalid_option(
                        name,
                        format!("unknown custom behavior '{}'", other),
                    ))
                }
            };
        }
        Ok(behavior)
    }
}

/// The behavioral options of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenOptions {
    pub aliases: Vec<String>,
    pub comment: Option<String>,
    pub computable: Option<bool>,
    pub custom: CustomBehavior,
    pub getter: String,
    pub setter: String,
    pub initial: String,
    pub high_priority: bool,
    pub top_priority: bool,
    pub sink_priority: bool,
    pub internal_only: bool,
    pub logical_property_group: Option<LogicalPropertyGroup>,
    /// Longhand names; resolved to handles when the property set links.
    pub longhands: Vec<String>,
    pub parser_exported: bool,
    pub parser_function: Option<String>,
    /// The raw grammar term; fixup happens during property construction.
    pub parser_grammar: Option<Term>,
    pub parser_grammar_comment: Option<String>,
    pub parser_requires_context: bool,
    pub parser_requires_context_mode: bool,
    pub parser_requires_current_shorthand: bool,
    pub parser_requires_current_property: bool,
    pub parser_requires_quirks_mode: bool,
    pub parser_requires_value_pool: bool,
    pub parser_additional_parameters: Vec<String>,
    /// Related property name; reciprocity is checked at linking.
    pub related_property: Option<String>,
    pub settings_flag: Option<String>,
    pub skip_parser: bool,
    pub status: Option<Status>,
    pub synonym: Option<String>,
    pub url: Option<String>,
}

fn codegen_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("aliases", &[ConfigType::Array]),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("computable", &[ConfigType::Bool]),
        SchemaEntry::new("custom", &[ConfigType::String]),
        SchemaEntry::new("custom-parser", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("enable-if", &[ConfigType::String]),
        SchemaEntry::new("getter", &[ConfigType::String]),
        SchemaEntry::new("high-priority", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("initial", &[ConfigType::String]),
        SchemaEntry::new("internal-only", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("logical-property-group", &[ConfigType::Object]),
        SchemaEntry::new("longhands", &[ConfigType::Array]),
        SchemaEntry::new("name-for-methods", &[ConfigType::String]),
        SchemaEntry::new(
            "parser-grammar",
            &[ConfigType::String, ConfigType::Array, ConfigType::Object],
        ),
        SchemaEntry::new("parser-grammar-comment", &[ConfigType::String]),
        SchemaEntry::new("parser-exported", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("parser-function", &[ConfigType::String]),
        SchemaEntry::new("parser-additional-parameters", &[ConfigType::Array]),
        SchemaEntry::new("parser-requires-context", &[ConfigType::Bool]).with_default(true),
        SchemaEntry::new("parser-requires-context-mode", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("parser-requires-current-property", &[ConfigType::Bool])
            .with_default(false),
        SchemaEntry::new("parser-requires-current-shorthand", &[ConfigType::Bool])
            .with_default(false),
        SchemaEntry::new("parser-requires-quirks-mode", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("parser-requires-value-pool", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("related-property", &[ConfigType::String]),
        SchemaEntry::new("setter", &[ConfigType::String]),
        SchemaEntry::new("settings-flag", &[ConfigType::String]),
        SchemaEntry::new("sink-priority", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("skip-codegen", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("skip-parser", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("status", &[ConfigType::String, ConfigType::Object]),
        SchemaEntry::new("synonym", &[ConfigType::String]),
        SchemaEntry::new("top-priority", &[ConfigType::Bool]).with_default(false),
        SchemaEntry::new("url", &[ConfigType::String]),
    ])
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pick the enabled variant when `codegen-properties` is a list of
/// conditional variants. Every variant must carry an `enable-if`, and
/// the first variant whose condition passes wins. A variant list with
/// nothing enabled is a hard error, never a silent default.
fn select_variant(flags: &FeatureFlags, property_name: &str, value: &Value) -> ModelResult<Value> {
    let variants = match value.as_array() {
        Some(variants) => variants,
        None => return Ok(value.clone()),
    };
    for variant in variants {
        let condition = variant
            .get("enable-if")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ModelError::invalid_option(
                    property_name,
                    "every 'codegen-properties' variant needs an 'enable-if'",
                )
            })?;
        if flags.is_enabled(condition) {
            return Ok(variant.clone());
        }
    }
    Err(ModelError::invalid_option(
        property_name,
        "no 'codegen-properties' variant matches the active feature set",
    ))
}

/// The outcome of reading a property's codegen options.
#[derive(Debug)]
pub enum CodegenOutcome {
    /// The property is excluded from the model.
    Skipped,
    Built(Box<(PropertyName, CodegenOptions)>),
}

impl CodegenOptions {
    /// Read a property's `codegen-properties` block.
    ///
    /// Returns `Skipped` when the block's `enable-if` is unsatisfied or
    /// `skip-codegen` is set.
    pub fn from_config(
        flags: &FeatureFlags,
        path: &str,
        property_name: &str,
        value: &Value,
    ) -> ModelResult<CodegenOutcome> {
        let selected = select_variant(flags, property_name, value)?;
        let validated = codegen_schema().validate(path, &selected)?;

        if let Some(condition) = validated.get_str("enable-if") {
            if !flags.is_enabled(condition) {
                debug!(path = %path, condition = %condition, "property disabled, skipping");
                return Ok(CodegenOutcome::Skipped);
            }
        }
        if validated.get_bool("skip-codegen") == Some(true) {
            debug!(path = %path, "skip-codegen set, skipping property");
            return Ok(CodegenOutcome::Skipped);
        }

        let name = PropertyName::new(property_name, validated.get_string("name-for-methods"));

        let longhands = match validated.get_array("longhands") {
            Some(raw) => crate::parse_longhands(flags, path, raw)?,
            None => Vec::new(),
        };

        let custom = match validated.get_str("custom") {
            Some(text) => CustomBehavior::parse(property_name, text)?,
            None => CustomBehavior::empty(),
        };

        let logical_property_group = match validated.get("logical-property-group") {
            Some(raw) => Some(LogicalPropertyGroup::from_config(path, raw)?),
            None => None,
        };

        let status = match validated.get("status") {
            Some(raw) => Some(Status::from_config(path, raw)?),
            None => None,
        };

        let parser_grammar = match validated.get("parser-grammar") {
            Some(raw) => parse_term(flags, path, raw)?,
            None => None,
        };

        let mut parser_function = validated.get_string("parser-function");
        let custom_parser = validated.get_bool("custom-parser") == Some(true);

        let methods = name.name_for_methods().to_string();
        let mut options = CodegenOptions {
            aliases: validated.get_string_array("aliases").unwrap_or_default(),
            comment: validated.get_string("comment"),
            computable: validated.get_bool("computable"),
            custom,
            getter: validated
                .get_string("getter")
                .unwrap_or_else(|| lowercase_first(&methods)),
            setter: validated
                .get_string("setter")
                .unwrap_or_else(|| format!("set{}", methods)),
            initial: validated
                .get_string("initial")
                .unwrap_or_else(|| format!("initial{}", methods)),
            high_priority: validated.get_bool("high-priority") == Some(true),
            top_priority: validated.get_bool("top-priority") == Some(true),
            sink_priority: validated.get_bool("sink-priority") == Some(true),
            internal_only: validated.get_bool("internal-only") == Some(true),
            logical_property_group,
            longhands,
            parser_exported: validated.get_bool("parser-exported") == Some(true),
            parser_function: None,
            parser_grammar,
            parser_grammar_comment: validated.get_string("parser-grammar-comment"),
            parser_requires_context: validated.get_bool("parser-requires-context") == Some(true),
            parser_requires_context_mode: validated.get_bool("parser-requires-context-mode")
                == Some(true),
            parser_requires_current_shorthand: validated
                .get_bool("parser-requires-current-shorthand")
                == Some(true),
            parser_requires_current_property: validated
                .get_bool("parser-requires-current-property")
                == Some(true),
            parser_requires_quirks_mode: validated.get_bool("parser-requires-quirks-mode")
                == Some(true),
            parser_requires_value_pool: validated.get_bool("parser-requires-value-pool")
                == Some(true),
            parser_additional_parameters: validated
                .get_string_array("parser-additional-parameters")
                .unwrap_or_default(),
            related_property: validated.get_string("related-property"),
            settings_flag: validated.get_string("settings-flag"),
            skip_parser: validated.get_bool("skip-parser") == Some(true),
            status,
            synonym: validated.get_string("synonym"),
            url: validated.get_string("url"),
        };

        // Option conflicts.
        if custom_parser {
            if parser_function.is_some() {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'custom-parser' conflicts with 'parser-function'",
                ));
            }
            if options.skip_parser {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'custom-parser' conflicts with 'skip-parser'",
                ));
            }
            parser_function = Some(format!("consume{}", name.id_without_prefix()));
        }
        if parser_function.is_some() {
            if options.skip_parser {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'parser-function' conflicts with 'skip-parser'",
                ));
            }
            if !options.longhands.is_empty() {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'parser-function' conflicts with 'longhands'",
                ));
            }
            if options.parser_grammar.is_some() {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'parser-function' conflicts with 'parser-grammar'",
                ));
            }
        }
        options.parser_function = parser_function;

        let is_shorthand = !options.longhands.is_empty();
        if options.top_priority {
            if is_shorthand {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'top-priority' cannot apply to a shorthand",
                ));
            }
            if options.high_priority {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'top-priority' conflicts with 'high-priority'",
                ));
            }
            if options.comment.is_none() {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'top-priority' requires a comment explaining the need",
                ));
            }
        }
        if options.high_priority && is_shorthand {
            return Err(ModelError::invalid_option(
                property_name,
                "'high-priority' cannot apply to a shorthand",
            ));
        }
        if options.sink_priority && is_shorthand {
            return Err(ModelError::invalid_option(
                property_name,
                "'sink-priority' cannot apply to a shorthand",
            ));
        }
        if let Some(related) = &options.related_property {
            if related == property_name {
                return Err(ModelError::invalid_option(
                    property_name,
                    "a property cannot be related to itself",
                ));
            }
            if is_shorthand {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'related-property' cannot apply to a shorthand",
                ));
            }
            if options.high_priority {
                return Err(ModelError::invalid_option(
                    property_name,
                    "'related-property' conflicts with 'high-priority'",
                ));
            }
        }
        if options.logical_property_group.is_some() && is_shorthand {
            return Err(ModelError::invalid_option(
                property_name,
                "'logical-property-group' cannot apply to a shorthand",
            ));
        }
        if options.internal_only && options.computable == Some(true) {
            return Err(ModelError::invalid_option(
                property_name,
                "'internal-only' properties cannot be computable",
            ));
        }

        Ok(CodegenOutcome::Built(Box::new((name, options))))
    }

    pub fn is_shorthand(&self) -> bool {
        !self.longhands.is_empty()
    }

    /// Deferred properties sort behind plain longhands.
    pub fn is_deferred(&self) -> bool {
        self.related_property.is_some() || self.logical_property_group.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(flags: &FeatureFlags, name: &str, value: Value) -> ModelResult<CodegenOutcome> {
        CodegenOptions::from_config(flags, "$test", name, &value)
    }

    fn built(outcome: CodegenOutcome) -> (PropertyName, CodegenOptions) {
        match outcome {
            CodegenOutcome::Built(inner) => *inner,
            CodegenOutcome::Skipped => panic!("expected built options"),
        }
    }

    #[test]
    fn test_accessor_defaults() {
        let flags = FeatureFlags::new();
        let (name, options) = built(build(&flags, "margin-top", json!({})).unwrap());
        assert_eq!(name.name_for_methods(), "MarginTop");
        assert_eq!(options.getter, "marginTop");
        assert_eq!(options.setter, "setMarginTop");
        assert_eq!(options.initial, "initialMarginTop");
    }

    #[test]
    fn test_custom_all_expands() {
        let flags = FeatureFlags::new();
        let (_, options) =
            built(build(&flags, "direction", json!({"custom": "All"})).unwrap());
        assert_eq!(options.custom, CustomBehavior::all());

        let (_, options) =
            built(build(&flags, "z-index", json!({"custom": "Initial|Value"})).unwrap());
        assert!(options.custom.contains(CustomBehavior::INITIAL));
        assert!(!options.custom.contains(CustomBehavior::INHERIT));
    }

    #[test]
    fn test_custom_parser_canonicalizes() {
        let flags = FeatureFlags::new();
        let (_, options) =
            built(build(&flags, "grid-template-rows", json!({"custom-parser": true})).unwrap());
        assert_eq!(
            options.parser_function.as_deref(),
            Some("consumeGridTemplateRows")
        );
    }

    #[test]
    fn test_skip_codegen_skips() {
        let flags = FeatureFlags::new();
        assert!(matches!(
            build(&flags, "x", json!({"skip-codegen": true})).unwrap(),
            CodegenOutcome::Skipped
        ));
    }

    #[test]
    fn test_disabled_property_skips() {
        let flags = FeatureFlags::new();
        assert!(matches!(
            build(&flags, "x", json!({"enable-if": "ENABLE_X"})).unwrap(),
            CodegenOutcome::Skipped
        ));
    }

    #[test]
    fn test_variant_selection() {
        let flags = FeatureFlags::from_defines(["ENABLE_B"]);
        let (_, options) = built(
            build(
                &flags,
                "x",
                json!([
                    {"enable-if": "ENABLE_A", "high-priority": true},
                    {"enable-if": "ENABLE_B", "settings-flag": "bSetting"}
                ]),
            )
            .unwrap(),
        );
        assert!(!options.high_priority);
        assert_eq!(options.settings_flag.as_deref(), Some("bSetting"));
    }

    #[test]
    fn test_variant_without_enable_if_is_an_error() {
        let flags = FeatureFlags::new();
        let err = build(&flags, "x", json!([{"high-priority": true}])).unwrap_err();
        assert!(err.to_string().contains("enable-if"));
    }

    #[test]
    fn test_no_enabled_variant_is_an_error() {
        let flags = FeatureFlags::new();
        let err = build(
            &flags,
            "x",
            json!([
                {"enable-if": "ENABLE_A", "high-priority": true},
                {"enable-if": "ENABLE_B", "sink-priority": true}
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("variant"));
    }

    #[test]
    fn test_top_priority_invariants() {
        let flags = FeatureFlags::new();
        let err = build(&flags, "x", json!({"top-priority": true})).unwrap_err();
        assert!(err.to_string().contains("comment"));

        let err = build(
            &flags,
            "x",
            json!({
                "top-priority": true,
                "high-priority": true,
                "comment": "needed early"
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("high-priority"));

        let err = build(
            &flags,
            "x",
            json!({
                "top-priority": true,
                "comment": "needed early",
                "longhands": ["a", "b"]
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("shorthand"));
    }

    #[test]
    fn test_related_property_invariants() {
        let flags = FeatureFlags::new();
        let err = build(&flags, "x", json!({"related-property": "x"})).unwrap_err();
        assert!(err.to_string().contains("itself"));

        let err = build(
            &flags,
            "x",
            json!({"related-property": "y", "high-priority": true}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("high-priority"));
    }

    #[test]
    fn test_parser_function_conflicts() {
        let flags = FeatureFlags::new();
        let err = build(
            &flags,
            "x",
            json!({"parser-function": "consumeX", "skip-parser": true}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("skip-parser"));

        let err = build(
            &flags,
            "x",
            json!({"parser-function": "consumeX", "parser-grammar": "<length>"}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("parser-grammar"));
    }

    #[test]
    fn test_disabled_longhand_entries_drop() {
        let flags = FeatureFlags::new();
        let (_, options) = built(
            build(
                &flags,
                "margin",
                json!({"longhands": [
                    "margin-top",
                    {"value": "margin-trim", "enable-if": "ENABLE_MARGIN_TRIM"}
                ]}),
            )
            .unwrap(),
        );
        assert_eq!(options.longhands, vec!["margin-top".to_string()]);
        assert!(options.is_shorthand());
    }
}
