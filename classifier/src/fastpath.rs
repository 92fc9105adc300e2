//! Keyword fast-path tables.

use cssgen_core::KeywordName;
use cssgen_grammar::KeywordTerm;

/// A guard on a keyword entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordCondition {
    /// Only valid when the runtime setting is on.
    SettingsFlag(String),
    /// Only valid in internal (user-agent stylesheet) parsing mode.
    InternalOnly,
}

/// One keyword of a fast-path table.
#[derive(Debug, Clone, PartialEq)]
pub struct FastPathEntry {
    pub keyword: KeywordName,
    pub conditions: Vec<KeywordCondition>,
    /// The keyword produced on a match; differs from `keyword` for
    /// aliased entries.
    pub value: KeywordName,
}

/// A deduplicated, ordered keyword table. The same table answers both
/// validity queries and value consumption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastPathTable {
    entries: Vec<FastPathEntry>,
}

impl FastPathTable {
    /// Build a table from keyword terms: duplicates collapse to their
    /// first occurrence, entries sort by keyword name with prefixed
    /// keywords last.
    pub fn from_keywords<'a, I>(keywords: I) -> FastPathTable
    where
        I: IntoIterator<Item = &'a KeywordTerm>,
    {
        let mut entries: Vec<FastPathEntry> = Vec::new();
        for keyword in keywords {
            if entries.iter().any(|entry| entry.keyword == keyword.name) {
                continue;
            }
            let mut conditions = Vec::new();
            if let Some(flag) = &keyword.settings_flag {
                conditions.push(KeywordCondition::SettingsFlag(flag.clone()));
            }
            if keyword.internal {
                conditions.push(KeywordCondition::InternalOnly);
            }
            entries.push(FastPathEntry {
                keyword: keyword.name.clone(),
                conditions,
                value: keyword.resolved_value().clone(),
            });
        }
        entries.sort_by(|a, b| {
            a.keyword
                .is_prefixed()
                .cmp(&b.keyword.is_prefixed())
                .then_with(|| a.keyword.name().cmp(b.keyword.name()))
        });
        FastPathTable { entries }
    }

    pub fn entries(&self) -> &[FastPathEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any entry's validity depends on the parser context.
    pub fn requires_context(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| !entry.conditions.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(name: &str) -> KeywordTerm {
        KeywordTerm::new(name)
    }

    #[test]
    fn test_ordering_prefixed_last() {
        let keywords = vec![keyword("-webkit-box"), keyword("flex"), keyword("block")];
        let table = FastPathTable::from_keywords(&keywords);
        let names: Vec<&str> = table.entries().iter().map(|e| e.keyword.name()).collect();
        assert_eq!(names, vec!["block", "flex", "-webkit-box"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = vec![keyword("auto"), keyword("auto"), keyword("none")];
        let table = FastPathTable::from_keywords(&keywords);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_conditions_and_context() {
        let mut gated = keyword("masonry");
        gated.settings_flag = Some("masonryEnabled".to_string());
        let table = FastPathTable::from_keywords([&keyword("none"), &gated]);
        assert!(table.requires_context());
        let entry = table
            .entries()
            .iter()
            .find(|e| e.keyword.name() == "masonry")
            .unwrap();
        assert_eq!(
            entry.conditions,
            vec![KeywordCondition::SettingsFlag("masonryEnabled".to_string())]
        );
    }

    #[test]
    fn test_alias_resolves_value() {
        let mut aliased = keyword("word-wrap");
        aliased.aliased_to = Some("break-word".into());
        let table = FastPathTable::from_keywords([&aliased]);
        assert_eq!(table.entries()[0].value.name(), "break-word");
    }
}
