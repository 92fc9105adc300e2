//! The five-way classification.

use crate::{
    BlockPlan, CallContext, ClassifyError, ClassifyResult, FastPathTable, ParserStrategy,
};
use cssgen_grammar::Term;
use cssgen_model::{Property, SharedRule};

/// Classify a property into its parser-generation strategy.
///
/// The predicates apply in priority order; the first match wins.
pub fn classify(property: &Property) -> ClassifyResult<ParserStrategy> {
    if property.is_shorthand() || property.codegen.skip_parser {
        return Ok(ParserStrategy::Skip);
    }

    if let Some(function) = &property.codegen.parser_function {
        return Ok(ParserStrategy::Custom {
            function: function.clone(),
            call: CallContext::from_options(&property.codegen),
        });
    }

    let grammar = property
        .grammar
        .as_ref()
        .ok_or_else(|| ClassifyError::missing_grammar(property.name.name()))?;

    if let Some(keywords) = keyword_only_alternatives(&grammar.root) {
        return Ok(ParserStrategy::FastPathKeywordOnly {
            table: FastPathTable::from_keywords(keywords),
        });
    }

    if let Term::Reference(reference) = &grammar.root {
        let consumer = reference.builtin.clone().ok_or_else(|| {
            ClassifyError::unresolved_reference(
                property.name.name(),
                reference.reference_string(),
            )
        })?;
        return Ok(ParserStrategy::Direct {
            consumer,
            exported: property.codegen.parser_exported,
        });
    }

    let plan = BlockPlan::for_term(property.name.name(), &grammar.root)?;
    Ok(ParserStrategy::Generated { plan })
}

/// The keyword terms of a root that consists solely of fast-path
/// eligible keywords, or `None` when anything else is present.
fn keyword_only_alternatives(root: &Term) -> Option<Vec<&cssgen_grammar::KeywordTerm>> {
    let keywords = root.keyword_terms();
    if keywords.is_empty() || !root.reference_terms().is_empty() {
        return None;
    }
    if keywords
        .iter()
        .all(|keyword| keyword.is_eligible_for_fast_path())
    {
        Some(keywords)
    } else {
        None
    }
}

/// Plan the consumer for a shared grammar rule. Only exported rules get
/// one; unexported rules were inlined during fixup.
pub fn plan_shared_rule(rule: &SharedRule) -> ClassifyResult<Option<BlockPlan>> {
    if !rule.exported {
        return Ok(None);
    }
    BlockPlan::for_term(&rule.name, &rule.root).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssgen_core::FeatureFlags;
    use cssgen_grammar::RuleIndex;
    use cssgen_model::SharedRules;
    use serde_json::{json, Value};

    fn property(name: &str, config: Value) -> Property {
        Property::from_config(
            &FeatureFlags::new(),
            &RuleIndex::empty(),
            "$test",
            name,
            &config,
        )
        .unwrap()
        .unwrap()
    }

    #[test]
    fn test_shorthand_and_skip_parser_skip() {
        let shorthand = property("a", json!({"codegen-properties": {"longhands": ["b"]}}));
        assert!(classify(&shorthand).unwrap().is_skip());

        let skipped = property("c", json!({"codegen-properties": {"skip-parser": true}}));
        assert!(classify(&skipped).unwrap().is_skip());
    }

    #[test]
    fn test_custom_strategy() {
        let custom = property(
            "transform",
            json!({"codegen-properties": {
                "parser-function": "consumeTransform",
                "parser-requires-quirks-mode": true
            }}),
        );
        match classify(&custom).unwrap() {
            ParserStrategy::Custom { function, call } => {
                assert_eq!(function, "consumeTransform");
                assert!(call.quirks_mode);
                assert!(call.context);
                assert!(!call.value_pool);
            }
            other => panic!("expected custom, got {:?}", other),
        }
    }

    #[test]
    fn test_keyword_only_fast_path() {
        let keywords = property("clear", json!({"values": ["none", "left", "right", "both"]}));
        match classify(&keywords).unwrap() {
            ParserStrategy::FastPathKeywordOnly { table } => assert_eq!(table.len(), 4),
            other => panic!("expected fast path, got {:?}", other),
        }
    }

    #[test]
    fn test_aliased_keyword_blocks_fast_path() {
        let aliased = property(
            "word-break",
            json!({"values": [
                "normal",
                {"value": "word-wrap", "aliased-to": "break-word"}
            ]}),
        );
        assert!(matches!(
            classify(&aliased).unwrap(),
            ParserStrategy::Generated { .. }
        ));
    }

    #[test]
    fn test_direct_strategy() {
        let direct = property(
            "order",
            json!({"codegen-properties": {
                "parser-grammar": "<integer>",
                "parser-exported": true
            }}),
        );
        match classify(&direct).unwrap() {
            ParserStrategy::Direct { consumer, exported } => {
                assert_eq!(consumer.consume_function(), "consumeInteger");
                assert!(exported);
            }
            other => panic!("expected direct, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_strategy() {
        let generated = property(
            "width",
            json!({
                "values": ["auto"],
                "codegen-properties": {"parser-grammar": ["<<values>>", "<length-percentage [0,inf]>"]}
            }),
        );
        match classify(&generated).unwrap() {
            ParserStrategy::Generated { plan } => assert_eq!(plan.blocks.len(), 2),
            other => panic!("expected generated, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_grammar_is_an_error() {
        let bare = property("mystery", json!({}));
        let err = classify(&bare).unwrap_err();
        assert!(err.to_string().contains("neither a grammar"));
    }

    #[test]
    fn test_unresolved_single_reference_is_an_error() {
        let unresolved = property(
            "background-image",
            json!({"codegen-properties": {"parser-grammar": "<image>"}}),
        );
        let err = classify(&unresolved).unwrap_err();
        assert!(err.to_string().contains("<image>"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let p = property(
            "width",
            json!({
                "values": ["auto", "min-content"],
                "codegen-properties": {"parser-grammar": ["<<values>>", "<length-percentage>"]}
            }),
        );
        let first = classify(&p).unwrap();
        let second = classify(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_rule_planning() {
        let rules = SharedRules::from_config(
            &FeatureFlags::new(),
            "$rules",
            &json!({
                "<exported-rule>": {"grammar": ["none", "<color>"], "exported": true},
                "<inline-rule>": {"grammar": ["a", "b"]}
            }),
        )
        .unwrap();

        let exported = rules.get("<exported-rule>").unwrap();
        let plan = plan_shared_rule(exported).unwrap().unwrap();
        assert_eq!(plan.blocks.len(), 2);

        let inline = rules.get("<inline-rule>").unwrap();
        assert!(plan_shared_rule(inline).unwrap().is_none());
    }
}
