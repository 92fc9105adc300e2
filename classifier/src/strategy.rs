//! Parser-generation strategies.

use crate::{BlockPlan, FastPathTable};
use cssgen_model::CodegenOptions;
use cssgen_registry::BuiltinConsumer;

/// The parameters a custom parser function is called with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    pub current_property: bool,
    pub current_shorthand: bool,
    pub context: bool,
    pub context_mode: bool,
    pub quirks_mode: bool,
    pub value_pool: bool,
    pub additional_parameters: Vec<String>,
}

impl CallContext {
    pub fn from_options(options: &CodegenOptions) -> CallContext {
        CallContext {
            current_property: options.parser_requires_current_property,
            current_shorthand: options.parser_requires_current_shorthand,
            context: options.parser_requires_context,
            context_mode: options.parser_requires_context_mode,
            quirks_mode: options.parser_requires_quirks_mode,
            value_pool: options.parser_requires_value_pool,
            additional_parameters: options.parser_additional_parameters.clone(),
        }
    }
}

/// How a property's parser is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ParserStrategy {
    /// No parser: shorthands and explicitly skipped properties.
    Skip,
    /// A hand-written parser function.
    Custom { function: String, call: CallContext },
    /// The grammar is keywords only; one table handles everything.
    FastPathKeywordOnly { table: FastPathTable },
    /// The grammar is a single builtin reference; that consumer is the
    /// parser.
    Direct {
        consumer: BuiltinConsumer,
        exported: bool,
    },
    /// The general case: an ordered sequence of generated blocks.
    Generated { plan: BlockPlan },
}

impl ParserStrategy {
    pub fn is_skip(&self) -> bool {
        matches!(self, ParserStrategy::Skip)
    }
}
