//! Standardization status and specification metadata.

use crate::ModelResult;
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;

/// Statuses that exclude a definition from the compiled model.
pub const SKIPPED_STATUSES: &[&str] = &["unimplemented", "removed", "not considering"];

/// The standardization status of a property or value.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub status: String,
    pub comment: Option<String>,
    pub enabled_by_default: Option<bool>,
}

fn status_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("status", &[ConfigType::String]).required(),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("enabled-by-default", &[ConfigType::Bool]),
    ])
}

impl Status {
    /// Parse a status from its short string form or the object form.
    pub fn from_config(path: &str, value: &Value) -> ModelResult<Status> {
        if let Some(text) = value.as_str() {
            return Ok(Status {
                status: text.to_string(),
                comment: None,
                enabled_by_default: None,
            });
        }
        let validated = status_schema().validate(path, value)?;
        Ok(Status {
            status: validated.get_string("status").expect("required by schema"),
            comment: validated.get_string("comment"),
            enabled_by_default: validated.get_bool("enabled-by-default"),
        })
    }

    /// Whether this status excludes the definition from the model.
    pub fn is_skipped(&self) -> bool {
        SKIPPED_STATUSES.contains(&self.status.as_str())
    }

    pub fn is_internal(&self) -> bool {
        self.status == "internal"
    }
}

/// Specification metadata carried through for documentation output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    pub category: Option<String>,
    pub comment: Option<String>,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub keywords: Vec<String>,
    pub non_canonical_url: Option<String>,
    pub obsolete_category: Option<String>,
    pub obsolete_url: Option<String>,
    pub url: Option<String>,
}

fn specification_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("category", &[ConfigType::String]),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("description", &[ConfigType::String]),
        SchemaEntry::new("documentation-url", &[ConfigType::String]),
        SchemaEntry::new("keywords", &[ConfigType::Array]),
        SchemaEntry::new("non-canonical-url", &[ConfigType::String]),
        SchemaEntry::new("obsolete-category", &[ConfigType::String]),
        SchemaEntry::new("obsolete-url", &[ConfigType::String]),
        SchemaEntry::new("url", &[ConfigType::String]),
    ])
}

impl Specification {
    pub fn from_config(path: &str, value: &Value) -> ModelResult<Specification> {
        let validated = specification_schema().validate(path, value)?;
        Ok(Specification {
            category: validated.get_string("category"),
            comment: validated.get_string("comment"),
            description: validated.get_string("description"),
            documentation_url: validated.get_string("documentation-url"),
            keywords: validated.get_string_array("keywords").unwrap_or_default(),
            non_canonical_url: validated.get_string("non-canonical-url"),
            obsolete_category: validated.get_string("obsolete-category"),
            obsolete_url: validated.get_string("obsolete-url"),
            url: validated.get_string("url"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_string() {
        let status = Status::from_config("$x", &json!("experimental")).unwrap();
        assert_eq!(status.status, "experimental");
        assert!(!status.is_skipped());
    }

    #[test]
    fn test_status_from_object() {
        let status = Status::from_config(
            "$x",
            &json!({"status": "unimplemented", "comment": "tracked elsewhere"}),
        )
        .unwrap();
        assert!(status.is_skipped());
        assert_eq!(status.comment.as_deref(), Some("tracked elsewhere"));
    }

    #[test]
    fn test_internal_status() {
        let status = Status::from_config("$x", &json!("internal")).unwrap();
        assert!(status.is_internal());
        assert!(!status.is_skipped());
    }

    #[test]
    fn test_specification_fields() {
        let spec = Specification::from_config(
            "$x",
            &json!({"category": "css-box", "keywords": ["margin"]}),
        )
        .unwrap();
        assert_eq!(spec.category.as_deref(), Some("css-box"));
        assert_eq!(spec.keywords, vec!["margin".to_string()]);
    }
}
