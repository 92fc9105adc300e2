//! Name types for properties, keywords and grammar rules.
//!
//! Every named entity carries both its external hyphenated spelling
//! (e.g. `-webkit-line-clamp`) and a derived CamelCase identifier
//! (e.g. `WebkitLineClamp`). The identifier is derived once at
//! construction and cached.

use std::fmt;

/// Names whose identifier is not derivable by the hyphen rule.
const SPECIAL_CASE_IDS: &[(&str, &str)] = &[("url", "URL")];

/// Derive a CamelCase identifier from a hyphenated name.
///
/// The first non-hyphen character and every character following a hyphen
/// are uppercased; hyphens themselves are dropped.
fn derive_id(name: &str) -> String {
    for (special, id) in SPECIAL_CASE_IDS {
        if name == *special {
            return (*id).to_string();
        }
    }

    let mut id = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            id.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            id.push(ch);
        }
    }
    id
}

/// A hyphenated external name with its cached CamelCase identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    name: String,
    id: String,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = derive_id(&name);
        Self { name, id }
    }

    /// The external hyphenated spelling.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived CamelCase identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The identifier with its first letter lowercased.
    pub fn id_with_lowercase_first_letter(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether the external name starts with a vendor prefix hyphen.
    pub fn is_prefixed(&self) -> bool {
        self.name.starts_with('-')
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

/// The name of a style property, with the forms used to reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName {
    name: Name,
    name_for_methods: String,
}

impl PropertyName {
    /// Build a property name. `name_for_methods` overrides the derived
    /// method-name form; without it the identifier is used with any
    /// `Webkit` prefix stripped.
    pub fn new(name: impl Into<String>, name_for_methods: Option<String>) -> Self {
        let name = Name::new(name);
        let name_for_methods =
            name_for_methods.unwrap_or_else(|| name.id().replace("Webkit", ""));
        Self {
            name,
            name_for_methods,
        }
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn id_without_prefix(&self) -> &str {
        self.name.id()
    }

    /// The form used when naming accessor methods.
    pub fn name_for_methods(&self) -> &str {
        &self.name_for_methods
    }

    /// The enum member form, e.g. `CSSPropertyWebkitLineClamp`.
    pub fn id(&self) -> String {
        format!("CSSProperty{}", self.name.id())
    }

    /// The fully scoped enum member form.
    pub fn scoped_id(&self) -> String {
        format!("CSSPropertyID::CSSProperty{}", self.name.id())
    }

    pub fn is_prefixed(&self) -> bool {
        self.name.is_prefixed()
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The name of a keyword value, with the forms used to reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordName {
    name: Name,
}

impl KeywordName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
        }
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn id_without_prefix(&self) -> &str {
        self.name.id()
    }

    /// The enum member form, e.g. `CSSValueAuto`.
    pub fn id(&self) -> String {
        format!("CSSValue{}", self.name.id())
    }

    /// The fully scoped enum member form.
    pub fn scoped_id(&self) -> String {
        format!("CSSValueID::CSSValue{}", self.name.id())
    }

    pub fn is_prefixed(&self) -> bool {
        self.name.is_prefixed()
    }
}

impl fmt::Display for KeywordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for KeywordName {
    fn from(name: &str) -> Self {
        KeywordName::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id_simple() {
        assert_eq!(Name::new("color").id(), "Color");
        assert_eq!(Name::new("margin-top").id(), "MarginTop");
    }

    #[test]
    fn test_derive_id_prefixed() {
        assert_eq!(Name::new("-webkit-line-clamp").id(), "WebkitLineClamp");
        assert!(Name::new("-webkit-line-clamp").is_prefixed());
    }

    #[test]
    fn test_derive_id_special_case() {
        assert_eq!(Name::new("url").id(), "URL");
    }

    #[test]
    fn test_lowercase_first_letter_round_trip() {
        assert_eq!(Name::new("auto").id_with_lowercase_first_letter(), "auto");
        assert_eq!(
            Name::new("margin-top").id_with_lowercase_first_letter(),
            "marginTop"
        );
    }

    #[test]
    fn test_property_name_forms() {
        let name = PropertyName::new("margin-top", None);
        assert_eq!(name.id(), "CSSPropertyMarginTop");
        assert_eq!(name.scoped_id(), "CSSPropertyID::CSSPropertyMarginTop");
        assert_eq!(name.name_for_methods(), "MarginTop");
    }

    #[test]
    fn test_property_name_for_methods_strips_webkit() {
        let name = PropertyName::new("-webkit-line-clamp", None);
        assert_eq!(name.name_for_methods(), "LineClamp");

        let overridden =
            PropertyName::new("-webkit-line-clamp", Some("MaxLines".to_string()));
        assert_eq!(overridden.name_for_methods(), "MaxLines");
    }

    #[test]
    fn test_keyword_name_forms() {
        let name = KeywordName::new("min-content");
        assert_eq!(name.id(), "CSSValueMinContent");
        assert_eq!(name.scoped_id(), "CSSValueID::CSSValueMinContent");
        assert_eq!(name.name(), "min-content");
    }
}
