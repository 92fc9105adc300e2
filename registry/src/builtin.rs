//! Resolved builtin consumers.

use crate::{lookup, CategoryKind, ContextRequirement, RegistryError, RegistryResult};

/// One resolved parameter: the category it filled and the mapped value,
/// which may be absent for optional categories without a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgument {
    pub category: &'static str,
    pub value: Option<&'static str>,
}

/// A builtin consumer with its parameters resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinConsumer {
    name: &'static str,
    consume_function: &'static str,
    context: ContextRequirement,
    arguments: Vec<ResolvedArgument>,
}

impl BuiltinConsumer {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn consume_function(&self) -> &'static str {
        self.consume_function
    }

    /// The resolved arguments, in category declaration order.
    pub fn arguments(&self) -> &[ResolvedArgument] {
        &self.arguments
    }

    /// The mapped value resolved for a category, if any.
    pub fn argument(&self, category: &str) -> Option<&'static str> {
        self.arguments
            .iter()
            .find(|arg| arg.category == category)
            .and_then(|arg| arg.value)
    }

    pub fn requires_context(&self) -> bool {
        match self.context {
            ContextRequirement::Always => true,
            ContextRequirement::Never => false,
            ContextRequirement::UnlessModeGiven => self.argument("mode").is_none(),
        }
    }
}

/// Resolve a reference name and its parameter tokens against the builtin
/// table.
///
/// Returns `Ok(None)` when the name is not a builtin; the reference may
/// still resolve to a shared grammar rule later. Parameter errors on a
/// known builtin are fatal.
pub fn resolve(name: &str, parameters: &[String]) -> RegistryResult<Option<BuiltinConsumer>> {
    let def = match lookup(name) {
        Some(def) => def,
        None => return Ok(None),
    };

    // Category name -> token that selected it, for duplicate detection.
    let mut selected: Vec<(&'static str, &str, &'static str)> = Vec::new();

    for token in parameters {
        let found = def
            .categories
            .iter()
            .find_map(|category| category.token_value(token).map(|value| (category, value)));
        let (category, value) = match found {
            Some(found) => found,
            None => {
                let supported: Vec<String> = def
                    .categories
                    .iter()
                    .flat_map(|c| c.token_names())
                    .map(|t| format!("'{}'", t))
                    .collect();
                return Err(RegistryError::unknown_parameter(
                    def.name,
                    token,
                    supported.join(", "),
                ));
            }
        };

        if let Some((_, first, _)) = selected.iter().find(|(name, _, _)| *name == category.name) {
            return Err(RegistryError::duplicate_category(
                def.name,
                category.name,
                *first,
                token,
            ));
        }

        selected.push((category.name, token, value));
    }

    let mut arguments = Vec::with_capacity(def.categories.len());
    for category in def.categories {
        let supplied = selected
            .iter()
            .find(|(name, _, _)| *name == category.name)
            .map(|(_, _, value)| *value);
        let value = match (supplied, category.kind) {
            (Some(value), _) => Some(value),
            (None, CategoryKind::Optional { default }) => default,
            (None, CategoryKind::Required) => {
                let choices: Vec<String> =
                    category.token_names().map(|t| format!("'{}'", t)).collect();
                return Err(RegistryError::missing_required(
                    def.name,
                    category.name,
                    choices.join(", "),
                ));
            }
        };
        arguments.push(ResolvedArgument {
            category: category.name,
            value,
        });
    }

    Ok(Some(BuiltinConsumer {
        name: def.name,
        consume_function: def.consume_function,
        context: def.context,
        arguments,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_non_builtin_is_none() {
        assert!(resolve("image", &[]).unwrap().is_none());
    }

    #[test]
    fn test_defaults_fill_in() {
        let consumer = resolve("length", &[]).unwrap().unwrap();
        assert_eq!(consumer.argument("value-range"), Some("ValueRange::All"));
        assert_eq!(consumer.argument("unitless"), Some("UnitlessQuirk::Forbid"));
        assert_eq!(consumer.argument("mode"), None);
        assert_eq!(consumer.consume_function(), "consumeLength");
    }

    #[test]
    fn test_explicit_range() {
        let consumer = resolve("length", &params(&["[0,inf]"])).unwrap().unwrap();
        assert_eq!(
            consumer.argument("value-range"),
            Some("ValueRange::NonNegative")
        );
    }

    #[test]
    fn test_unknown_parameter_lists_supported() {
        let err = resolve("length", &params(&["bogus"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("'[0,inf]'"));
        assert!(message.contains("'svg'"));
    }

    #[test]
    fn test_duplicate_category_conflict() {
        let err = resolve("integer", &params(&["[0,inf]", "[1,inf]"])).unwrap_err();
        assert!(err.to_string().contains("pick one"));
    }

    #[test]
    fn test_context_requirements() {
        assert!(resolve("angle", &[]).unwrap().unwrap().requires_context());
        assert!(!resolve("number", &[]).unwrap().unwrap().requires_context());

        // Length needs the context for its mode unless one was supplied.
        assert!(resolve("length", &[]).unwrap().unwrap().requires_context());
        let strict = resolve("length", &params(&["strict"])).unwrap().unwrap();
        assert!(!strict.requires_context());
        assert_eq!(strict.argument("mode"), Some("HTMLStandardMode"));
    }
}
