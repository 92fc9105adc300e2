//! Shared-rule substitution.

use crate::{GrammarError, GrammarResult, Term};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The fixed roots of the shared grammar rules, keyed by reference
/// spelling (e.g. `<image>`).
///
/// Rules may reference each other; resolution fixes each rule once,
/// recursing into referenced rules first. A reference cycle is an error.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    roots: IndexMap<String, Term>,
}

impl RuleIndex {
    /// An index with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fix every rule root against the others.
    pub fn resolve(raw: IndexMap<String, Term>) -> GrammarResult<Self> {
        let mut resolver = Resolver {
            raw: &raw,
            done: IndexMap::new(),
            in_progress: HashSet::new(),
        };
        for name in raw.keys() {
            resolver.fix_rule(name)?;
        }
        // Restore definition order; recursion completes dependencies
        // before their dependents.
        let mut roots = IndexMap::new();
        for name in raw.keys() {
            let root = resolver
                .done
                .get(name)
                .cloned()
                .expect("every rule resolved above");
            roots.insert(name.clone(), root);
        }
        Ok(Self { roots })
    }

    /// The fixed root for a reference spelling, if the spelling names a
    /// shared rule.
    pub fn lookup(&self, reference: &str) -> Option<&Term> {
        self.roots.get(reference)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

struct Resolver<'a> {
    raw: &'a IndexMap<String, Term>,
    done: IndexMap<String, Term>,
    in_progress: HashSet<String>,
}

impl Resolver<'_> {
    fn fix_rule(&mut self, name: &str) -> GrammarResult<()> {
        if self.done.contains_key(name) {
            return Ok(());
        }
        if !self.in_progress.insert(name.to_string()) {
            return Err(GrammarError::rule_cycle(name));
        }
        let root = self.raw.get(name).expect("caller checked membership");
        let fixed = self.fix_term(root)?;
        self.in_progress.remove(name);
        self.done.insert(name.to_string(), fixed);
        Ok(())
    }

    fn fix_term(&mut self, term: &Term) -> GrammarResult<Term> {
        match term {
            Term::Keyword(_) => Ok(term.clone()),
            Term::Reference(reference) => {
                let spelling = reference.reference_string();
                if self.raw.contains_key(&spelling) {
                    self.fix_rule(&spelling)?;
                    Ok(self
                        .done
                        .get(&spelling)
                        .cloned()
                        .expect("fixed by the call above"))
                } else {
                    Ok(term.clone())
                }
            }
            Term::MatchOne(inner) => {
                let mut alternatives = Vec::with_capacity(inner.alternatives.len());
                for alternative in &inner.alternatives {
                    alternatives.push(self.fix_term(alternative)?);
                }
                Ok(Term::match_one(alternatives))
            }
        }
    }
}

impl Term {
    /// Substitute shared-rule references with their fixed roots, flatten
    /// nested match-one terms and collapse single survivors.
    ///
    /// References that resolve to neither a rule nor a builtin stay in
    /// place; the classifier rejects them if they survive to planning.
    /// Applying the pass twice yields the same tree.
    pub fn fixed(&self, rules: &RuleIndex) -> Term {
        match self {
            Term::Keyword(_) => self.clone(),
            Term::Reference(reference) => match rules.lookup(&reference.reference_string()) {
                Some(root) => root.clone(),
                None => self.clone(),
            },
            Term::MatchOne(inner) => Term::match_one(
                inner
                    .alternatives
                    .iter()
                    .map(|alternative| alternative.fixed(rules))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_term, KeywordTerm};
    use cssgen_core::FeatureFlags;
    use serde_json::json;

    fn term(value: serde_json::Value) -> Term {
        parse_term(&FeatureFlags::new(), "$test", &value)
            .unwrap()
            .unwrap()
    }

    fn keyword(name: &str) -> Term {
        Term::Keyword(KeywordTerm::new(name))
    }

    #[test]
    fn test_reference_substitution() {
        let mut raw = IndexMap::new();
        raw.insert("<line-style>".to_string(), term(json!(["solid", "dashed"])));
        let rules = RuleIndex::resolve(raw).unwrap();

        let fixed = term(json!(["none", "<line-style>"])).fixed(&rules);
        assert_eq!(fixed.keyword_terms().len(), 3);
        assert!(fixed.reference_terms().is_empty());
    }

    #[test]
    fn test_rules_reference_each_other() {
        let mut raw = IndexMap::new();
        raw.insert("<outer>".to_string(), term(json!(["a", "<inner>"])));
        raw.insert("<inner>".to_string(), term(json!(["b", "c"])));
        let rules = RuleIndex::resolve(raw).unwrap();

        let outer = rules.lookup("<outer>").unwrap();
        assert_eq!(outer.keyword_terms().len(), 3);
    }

    #[test]
    fn test_rule_cycle_is_an_error() {
        let mut raw = IndexMap::new();
        raw.insert("<a>".to_string(), term(json!(["x", "<b>"])));
        raw.insert("<b>".to_string(), term(json!(["y", "<a>"])));
        let err = RuleIndex::resolve(raw).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_unresolved_reference_stays() {
        let rules = RuleIndex::empty();
        let fixed = term(json!("<image>")).fixed(&rules);
        assert_eq!(fixed.reference_terms().len(), 1);
    }

    #[test]
    fn test_fixup_is_idempotent() {
        let mut raw = IndexMap::new();
        raw.insert("<line-style>".to_string(), term(json!(["solid", "dashed"])));
        let rules = RuleIndex::resolve(raw).unwrap();

        let source = term(json!(["none", "<line-style>", ["a", "b"]]));
        let once = source.fixed(&rules);
        let twice = once.fixed(&rules);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_alternative_collapses() {
        let rules = RuleIndex::empty();
        let fixed = Term::match_one(vec![keyword("auto")]).fixed(&rules);
        assert_eq!(fixed, keyword("auto"));
    }
}
