//! Schema entry definitions.

use crate::ConfigType;
use serde_json::Value;

/// The definition of one configuration key: the runtime types it accepts,
/// an optional default, and whether it must be present.
///
/// A required entry never carries a default; the builder asserts this
/// since entries are static data.
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    key: String,
    allowed: Vec<ConfigType>,
    default: Option<Value>,
    required: bool,
}

impl SchemaEntry {
    pub fn new(key: impl Into<String>, allowed: &[ConfigType]) -> Self {
        Self {
            key: key.into(),
            allowed: allowed.to_vec(),
            default: None,
            required: false,
        }
    }

    /// Set the default filled in when the key is absent.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        debug_assert!(!self.required, "required entries cannot carry a default");
        self.default = Some(default.into());
        self
    }

    /// Mark the key as required.
    pub fn required(mut self) -> Self {
        debug_assert!(self.default.is_none(), "required entries cannot carry a default");
        self.required = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn allowed(&self) -> &[ConfigType] {
        &self.allowed
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether a value's runtime type is acceptable for this entry.
    pub fn accepts(&self, value: &Value) -> bool {
        self.allowed.iter().any(|t| t.matches(value))
    }

    /// The allowed types joined for diagnostics, e.g. "string or array".
    pub fn allowed_names(&self) -> String {
        let names: Vec<&str> = self.allowed.iter().map(|t| t.name()).collect();
        names.join(" or ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts() {
        let entry = SchemaEntry::new("value", &[ConfigType::String, ConfigType::Array]);
        assert!(entry.accepts(&json!("auto")));
        assert!(entry.accepts(&json!(["a", "b"])));
        assert!(!entry.accepts(&json!(true)));
    }

    #[test]
    fn test_allowed_names() {
        let entry = SchemaEntry::new("value", &[ConfigType::String, ConfigType::Array]);
        assert_eq!(entry.allowed_names(), "string or array");
    }

    #[test]
    fn test_default_and_required() {
        let entry = SchemaEntry::new("exported", &[ConfigType::Bool]).with_default(false);
        assert_eq!(entry.default(), Some(&json!(false)));
        assert!(!entry.is_required());

        let entry = SchemaEntry::new("grammar", &[ConfigType::String]).required();
        assert!(entry.is_required());
        assert!(entry.default().is_none());
    }
}
