//! Block plans for generated consumers.

use crate::{ClassifyError, ClassifyResult, FastPathTable};
use cssgen_grammar::Term;
use cssgen_registry::BuiltinConsumer;

/// One generated block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// Probe the fast-path keyword table first.
    FastPathKeywords(FastPathTable),
    /// Call a builtin consumer.
    Reference(BuiltinConsumer),
    /// Handle the keywords the fast path could not take.
    Keywords(FastPathTable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// Conditional blocks fall through on failure; the final block's
    /// result is returned as is.
    pub conditional: bool,
}

/// The ordered block sequence of a generated consumer: the fast-path
/// keyword probe, then one block per reference term, then the leftover
/// keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPlan {
    pub blocks: Vec<Block>,
}

impl BlockPlan {
    /// Plan the blocks for a fixed grammar term. Every reference term
    /// must have resolved to a builtin by now.
    pub fn for_term(name: &str, term: &Term) -> ClassifyResult<BlockPlan> {
        let keywords = term.keyword_terms();
        let references = term.reference_terms();

        let fast_path: Vec<_> = keywords
            .iter()
            .copied()
            .filter(|keyword| keyword.is_eligible_for_fast_path())
            .collect();
        let leftover: Vec<_> = keywords
            .iter()
            .copied()
            .filter(|keyword| !keyword.is_eligible_for_fast_path())
            .collect();

        let mut kinds = Vec::new();
        if !fast_path.is_empty() {
            kinds.push(BlockKind::FastPathKeywords(FastPathTable::from_keywords(
                fast_path,
            )));
        }
        for reference in references {
            let consumer = reference.builtin.clone().ok_or_else(|| {
                ClassifyError::unresolved_reference(name, reference.reference_string())
            })?;
            kinds.push(BlockKind::Reference(consumer));
        }
        if !leftover.is_empty() {
            kinds.push(BlockKind::Keywords(FastPathTable::from_keywords(leftover)));
        }

        let last = kinds.len().saturating_sub(1);
        let blocks = kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| Block {
                kind,
                conditional: index < last,
            })
            .collect();

        Ok(BlockPlan { blocks })
    }

    /// Whether any block needs the parser context.
    pub fn requires_context(&self) -> bool {
        self.blocks.iter().any(|block| match &block.kind {
            BlockKind::FastPathKeywords(table) | BlockKind::Keywords(table) => {
                table.requires_context()
            }
            BlockKind::Reference(consumer) => consumer.requires_context(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssgen_core::FeatureFlags;
    use cssgen_grammar::parse_term;
    use serde_json::json;

    fn term(value: serde_json::Value) -> Term {
        parse_term(&FeatureFlags::new(), "$test", &value)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_block_order_and_conditions() {
        let plan = BlockPlan::for_term(
            "test",
            &term(json!(["auto", "<length [0,inf]>", "<percentage>"])),
        )
        .unwrap();

        assert_eq!(plan.blocks.len(), 3);
        assert!(matches!(plan.blocks[0].kind, BlockKind::FastPathKeywords(_)));
        assert!(matches!(plan.blocks[1].kind, BlockKind::Reference(_)));
        assert!(matches!(plan.blocks[2].kind, BlockKind::Reference(_)));
        assert!(plan.blocks[0].conditional);
        assert!(plan.blocks[1].conditional);
        assert!(!plan.blocks[2].conditional);
    }

    #[test]
    fn test_aliased_keywords_go_to_leftover_block() {
        let plan = BlockPlan::for_term(
            "test",
            &term(json!([
                "normal",
                {"value": "word-wrap", "aliased-to": "break-word"},
                "<length>"
            ])),
        )
        .unwrap();

        assert_eq!(plan.blocks.len(), 3);
        assert!(matches!(plan.blocks[0].kind, BlockKind::FastPathKeywords(_)));
        assert!(matches!(plan.blocks[1].kind, BlockKind::Reference(_)));
        match &plan.blocks[2].kind {
            BlockKind::Keywords(table) => {
                assert_eq!(table.entries()[0].value.name(), "break-word");
            }
            other => panic!("expected keyword block, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_reference_is_an_error() {
        let err = BlockPlan::for_term("test", &term(json!(["auto", "<image>"]))).unwrap_err();
        assert!(err.to_string().contains("<image>"));
    }

    #[test]
    fn test_context_propagation() {
        let with_color = BlockPlan::for_term("test", &term(json!(["none", "<color>"]))).unwrap();
        assert!(with_color.requires_context());

        let plain = BlockPlan::for_term("test", &term(json!(["none", "<number>"]))).unwrap();
        assert!(!plain.requires_context());
    }
}
