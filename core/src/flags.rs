//! Feature flags gating conditional definitions.

use std::collections::BTreeSet;

/// The set of feature defines active for a compilation run.
///
/// Conditions are single define names, optionally negated with a leading
/// `!`. The set is fixed for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    active: BTreeSet<String>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_defines<I, S>(defines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: defines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn activate(&mut self, define: impl Into<String>) {
        self.active.insert(define.into());
    }

    /// Evaluate a condition string. `"FLAG"` is satisfied when the flag
    /// is active, `"!FLAG"` when it is not.
    pub fn is_enabled(&self, condition: &str) -> bool {
        match condition.strip_prefix('!') {
            Some(flag) => !self.active.contains(flag),
            None => self.active.contains(condition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_condition() {
        let flags = FeatureFlags::from_defines(["ENABLE_GRID"]);
        assert!(flags.is_enabled("ENABLE_GRID"));
        assert!(!flags.is_enabled("ENABLE_MASONRY"));
    }

    #[test]
    fn test_negated_condition() {
        let flags = FeatureFlags::from_defines(["ENABLE_GRID"]);
        assert!(!flags.is_enabled("!ENABLE_GRID"));
        assert!(flags.is_enabled("!ENABLE_MASONRY"));
    }

    #[test]
    fn test_empty_flag_set() {
        let flags = FeatureFlags::new();
        assert!(!flags.is_enabled("ANYTHING"));
        assert!(flags.is_enabled("!ANYTHING"));
    }
}
