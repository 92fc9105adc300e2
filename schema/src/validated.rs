//! Schema-validated objects with typed accessors.

use indexmap::IndexMap;
use serde_json::Value;

/// An object that passed schema validation, with defaults filled in.
///
/// Entity constructors consume these through the typed accessors; the
/// key path is retained for diagnostics raised downstream.
#[derive(Debug, Clone)]
pub struct ValidatedObject {
    path: String,
    values: IndexMap<String, Value>,
}

impl ValidatedObject {
    pub(crate) fn new(path: String, values: IndexMap<String, Value>) -> Self {
        Self { path, values }
    }

    /// The JSON key path this object was validated at.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Remove and return a value, for constructors that take ownership.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_str(key).map(str::to_string)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.values.get(key).and_then(Value::as_array)
    }

    pub fn get_object(&self, key: &str) -> Option<&serde_json::Map<String, Value>> {
        self.values.get(key).and_then(Value::as_object)
    }

    /// The string elements of an array value. Non-string elements are
    /// skipped; type checking happened during validation.
    pub fn get_string_array(&self, key: &str) -> Option<Vec<String>> {
        self.get_array(key).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ValidatedObject {
        let mut values = IndexMap::new();
        values.insert("value".to_string(), json!("auto"));
        values.insert("exported".to_string(), json!(true));
        values.insert("longhands".to_string(), json!(["a", "b"]));
        ValidatedObject::new("$props.margin".to_string(), values)
    }

    #[test]
    fn test_typed_accessors() {
        let object = sample();
        assert_eq!(object.get_str("value"), Some("auto"));
        assert_eq!(object.get_bool("exported"), Some(true));
        assert_eq!(
            object.get_string_array("longhands"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(object.path(), "$props.margin");
    }

    #[test]
    fn test_take_removes() {
        let mut object = sample();
        assert_eq!(object.take("value"), Some(json!("auto")));
        assert_eq!(object.take("value"), None);
    }
}
