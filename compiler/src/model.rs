//! The compiled model.

use cssgen_classifier::{BlockPlan, ParserStrategy};
use cssgen_model::{LogicalGroup, PropertyId, PropertySet, SharedRules};
use indexmap::IndexMap;
use serde_json::Value;

/// Everything the code generators consume: the linked property set, a
/// strategy per property, the consumers planned for exported shared
/// rules, and the carried-through document metadata.
#[derive(Debug)]
pub struct CompiledModel {
    properties: PropertySet,
    /// Parallel to the property set, indexed by handle.
    strategies: Vec<ParserStrategy>,
    shared_rules: SharedRules,
    shared_rule_plans: IndexMap<String, BlockPlan>,
    categories: serde_json::Map<String, Value>,
    instructions: Vec<String>,
}

impl CompiledModel {
    pub(crate) fn new(
        properties: PropertySet,
        strategies: Vec<ParserStrategy>,
        shared_rules: SharedRules,
        shared_rule_plans: IndexMap<String, BlockPlan>,
        categories: serde_json::Map<String, Value>,
        instructions: Vec<String>,
    ) -> Self {
        Self {
            properties,
            strategies,
            shared_rules,
            shared_rule_plans,
            categories,
            instructions,
        }
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn strategy(&self, id: PropertyId) -> &ParserStrategy {
        &self.strategies[id.index()]
    }

    pub fn strategy_of(&self, name: &str) -> Option<&ParserStrategy> {
        self.properties.id_of(name).map(|id| self.strategy(id))
    }

    pub fn shared_rules(&self) -> &SharedRules {
        &self.shared_rules
    }

    /// The block plan of an exported shared rule.
    pub fn shared_rule_plan(&self, name: &str) -> Option<&BlockPlan> {
        self.shared_rule_plans.get(name)
    }

    pub fn logical_property_groups(&self) -> &IndexMap<String, LogicalGroup> {
        self.properties.logical_property_groups()
    }

    pub fn settings_flags(&self) -> Vec<String> {
        self.properties.settings_flags()
    }

    pub fn categories(&self) -> &serde_json::Map<String, Value> {
        &self.categories
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }
}
