//! Runtime type tags for configuration values.

use serde_json::Value;
use std::fmt;

/// The JSON runtime types a schema entry can allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ConfigType {
    /// Whether a JSON value has this runtime type. Integers also satisfy
    /// Float.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ConfigType::Bool => value.is_boolean(),
            ConfigType::Integer => value.is_i64() || value.is_u64(),
            ConfigType::Float => value.is_number(),
            ConfigType::String => value.is_string(),
            ConfigType::Array => value.is_array(),
            ConfigType::Object => value.is_object(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigType::Bool => "bool",
            ConfigType::Integer => "integer",
            ConfigType::Float => "float",
            ConfigType::String => "string",
            ConfigType::Array => "array",
            ConfigType::Object => "object",
        }
    }

    /// The display name of a JSON value's actual runtime type.
    pub fn name_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
            Value::Number(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_matches() {
        assert!(ConfigType::Bool.matches(&json!(true)));
        assert!(ConfigType::Integer.matches(&json!(3)));
        assert!(ConfigType::Float.matches(&json!(3)));
        assert!(ConfigType::Float.matches(&json!(3.5)));
        assert!(!ConfigType::Integer.matches(&json!(3.5)));
        assert!(ConfigType::String.matches(&json!("x")));
        assert!(ConfigType::Array.matches(&json!([])));
        assert!(ConfigType::Object.matches(&json!({})));
        assert!(!ConfigType::Object.matches(&json!([])));
    }

    #[test]
    fn test_name_of() {
        assert_eq!(ConfigType::name_of(&json!(3)), "integer");
        assert_eq!(ConfigType::name_of(&json!(3.5)), "float");
        assert_eq!(ConfigType::name_of(&json!(null)), "null");
    }
}
