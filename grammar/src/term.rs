//! The grammar term model.

use cssgen_core::{KeywordName, Name};
use cssgen_registry::BuiltinConsumer;
use std::fmt;

// ==================== Keyword terms ====================

/// A literal keyword alternative, e.g. `auto`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTerm {
    pub name: KeywordName,
    /// Another keyword this one canonicalizes to when consumed.
    pub aliased_to: Option<KeywordName>,
    /// Runtime setting gating this keyword.
    pub settings_flag: Option<String>,
    /// Only valid in internal (user-agent stylesheet) parsing mode.
    pub internal: bool,
}

impl KeywordTerm {
    pub fn new(name: impl Into<KeywordName>) -> Self {
        Self {
            name: name.into(),
            aliased_to: None,
            settings_flag: None,
            internal: false,
        }
    }

    /// Aliased keywords need canonicalization and cannot take the
    /// single-table fast path.
    pub fn is_eligible_for_fast_path(&self) -> bool {
        self.aliased_to.is_none()
    }

    /// Whether consuming this keyword is conditional on the parser
    /// context.
    pub fn requires_conditions(&self) -> bool {
        self.settings_flag.is_some() || self.internal
    }

    /// The keyword produced when this one matches.
    pub fn resolved_value(&self) -> &KeywordName {
        self.aliased_to.as_ref().unwrap_or(&self.name)
    }
}

// ==================== Reference terms ====================

/// A reference to a builtin consumer or a shared grammar rule, e.g.
/// `<length [0,inf]>`. Double angle brackets mark internal references.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTerm {
    pub name: Name,
    pub internal: bool,
    pub parameters: Vec<String>,
    /// Resolved when the name names a builtin consumer.
    pub builtin: Option<BuiltinConsumer>,
}

impl ReferenceTerm {
    pub fn is_builtin(&self) -> bool {
        self.builtin.is_some()
    }

    /// The internal sentinel substituted with a property's declared
    /// values during fixup.
    pub fn is_values_sentinel(&self) -> bool {
        self.internal && self.name.name() == "values"
    }

    /// The full reference spelling, used as the lookup key into the
    /// shared rule table.
    pub fn reference_string(&self) -> String {
        let mut body = self.name.name().to_string();
        for parameter in &self.parameters {
            body.push(' ');
            body.push_str(parameter);
        }
        if self.internal {
            format!("<<{}>>", body)
        } else {
            format!("<{}>", body)
        }
    }
}

impl fmt::Display for ReferenceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference_string())
    }
}

// ==================== Match-one terms ====================

/// Ordered alternation: the first matching alternative wins.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOneTerm {
    pub alternatives: Vec<Term>,
}

// ==================== Term ====================

/// A node of a property grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Keyword(KeywordTerm),
    Reference(ReferenceTerm),
    MatchOne(MatchOneTerm),
}

impl Term {
    /// Build a match-one term, inlining nested match-one alternatives
    /// and collapsing a single survivor to itself.
    pub fn match_one(alternatives: Vec<Term>) -> Term {
        let mut flat = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            match alternative {
                Term::MatchOne(inner) => flat.extend(inner.alternatives),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            flat.pop().expect("length checked")
        } else {
            Term::MatchOne(MatchOneTerm { alternatives: flat })
        }
    }

    /// Every keyword term in the tree, in definition order.
    pub fn keyword_terms(&self) -> Vec<&KeywordTerm> {
        let mut keywords = Vec::new();
        self.collect_keywords(&mut keywords);
        keywords
    }

    fn collect_keywords<'a>(&'a self, into: &mut Vec<&'a KeywordTerm>) {
        match self {
            Term::Keyword(keyword) => into.push(keyword),
            Term::Reference(_) => {}
            Term::MatchOne(inner) => {
                for alternative in &inner.alternatives {
                    alternative.collect_keywords(into);
                }
            }
        }
    }

    /// Every reference term in the tree, in definition order.
    pub fn reference_terms(&self) -> Vec<&ReferenceTerm> {
        let mut references = Vec::new();
        self.collect_references(&mut references);
        references
    }

    fn collect_references<'a>(&'a self, into: &mut Vec<&'a ReferenceTerm>) {
        match self {
            Term::Keyword(_) => {}
            Term::Reference(reference) => into.push(reference),
            Term::MatchOne(inner) => {
                for alternative in &inner.alternatives {
                    alternative.collect_references(into);
                }
            }
        }
    }

    /// Whether a `<<values>>` sentinel remains anywhere in the tree.
    pub fn contains_values_sentinel(&self) -> bool {
        match self {
            Term::Keyword(_) => false,
            Term::Reference(reference) => reference.is_values_sentinel(),
            Term::MatchOne(inner) => inner
                .alternatives
                .iter()
                .any(Term::contains_values_sentinel),
        }
    }

    /// Replace every `<<values>>` sentinel with the declared keyword
    /// values. A sentinel in root position with several values becomes a
    /// match-one term.
    pub fn substituted_values(&self, values: &[KeywordTerm]) -> Term {
        match self {
            Term::Reference(reference) if reference.is_values_sentinel() => {
                Term::match_one(values.iter().cloned().map(Term::Keyword).collect())
            }
            Term::MatchOne(inner) => Term::match_one(
                inner
                    .alternatives
                    .iter()
                    .map(|alternative| alternative.substituted_values(values))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// A property or shared-rule grammar: a single root term.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub root: Term,
}

impl Grammar {
    pub fn new(root: Term) -> Self {
        Self { root }
    }

    /// Build a grammar directly from a property's declared values.
    pub fn from_values(values: &[KeywordTerm]) -> Self {
        Self {
            root: Term::match_one(values.iter().cloned().map(Term::Keyword).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(name: &str) -> Term {
        Term::Keyword(KeywordTerm::new(name))
    }

    #[test]
    fn test_match_one_flattens_nested() {
        let term = Term::match_one(vec![
            keyword("none"),
            Term::match_one(vec![keyword("a"), keyword("b")]),
        ]);
        match term {
            Term::MatchOne(inner) => assert_eq!(inner.alternatives.len(), 3),
            other => panic!("expected match-one, got {:?}", other),
        }
    }

    #[test]
    fn test_match_one_collapses_single() {
        let term = Term::match_one(vec![keyword("auto")]);
        assert_eq!(term, keyword("auto"));
    }

    #[test]
    fn test_keyword_fast_path_eligibility() {
        let plain = KeywordTerm::new("auto");
        assert!(plain.is_eligible_for_fast_path());

        let mut aliased = KeywordTerm::new("word-wrap");
        aliased.aliased_to = Some("break-word".into());
        assert!(!aliased.is_eligible_for_fast_path());
        assert_eq!(aliased.resolved_value().name(), "break-word");
    }

    #[test]
    fn test_substituted_values_at_root() {
        let sentinel = Term::Reference(ReferenceTerm {
            name: Name::new("values"),
            internal: true,
            parameters: Vec::new(),
            builtin: None,
        });
        let values = vec![KeywordTerm::new("auto"), KeywordTerm::new("none")];
        let substituted = sentinel.substituted_values(&values);
        assert_eq!(substituted.keyword_terms().len(), 2);
        assert!(!substituted.contains_values_sentinel());
    }
}
