//! Parsing JSON-shaped term definitions.

use crate::{GrammarError, GrammarResult, KeywordTerm, ReferenceTerm, Term};
use cssgen_core::{FeatureFlags, Name};
use cssgen_schema::{ConfigType, Schema, SchemaEntry};
use serde_json::Value;
use tracing::debug;

fn term_schema() -> Schema {
    Schema::new(vec![
        SchemaEntry::new("value", &[ConfigType::String, ConfigType::Array]).required(),
        SchemaEntry::new("kind", &[ConfigType::String]),
        SchemaEntry::new("enable-if", &[ConfigType::String]),
        SchemaEntry::new("settings-flag", &[ConfigType::String]),
        SchemaEntry::new("status", &[ConfigType::String]),
        SchemaEntry::new("aliased-to", &[ConfigType::String]),
        SchemaEntry::new("comment", &[ConfigType::String]),
        SchemaEntry::new("url", &[ConfigType::String]),
    ])
}

/// Metadata an object-form definition attaches to its term.
#[derive(Debug, Default)]
struct TermMetadata {
    settings_flag: Option<String>,
    status: Option<String>,
    aliased_to: Option<String>,
}

impl TermMetadata {
    fn is_internal(&self) -> bool {
        self.status.as_deref() == Some("internal")
    }
}

/// Parse one term definition.
///
/// Returns `Ok(None)` only when the definition carries an unsatisfied
/// `enable-if` condition; the term is silently dropped. Every other
/// failure is an error.
pub fn parse_term(
    flags: &FeatureFlags,
    path: &str,
    value: &Value,
) -> GrammarResult<Option<Term>> {
    match value {
        Value::String(text) => {
            parse_term_string(path, text, TermMetadata::default()).map(Some)
        }
        Value::Array(items) => parse_alternatives(flags, path, items),
        Value::Object(_) => parse_term_object(flags, path, value),
        other => Err(GrammarError::invalid_term(
            path,
            format!("expected string, array or object, got {}", ConfigType::name_of(other)),
        )),
    }
}

fn parse_alternatives(
    flags: &FeatureFlags,
    path: &str,
    items: &[Value],
) -> GrammarResult<Option<Term>> {
    let mut alternatives = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, index);
        if let Some(term) = parse_term(flags, &item_path, item)? {
            alternatives.push(term);
        }
    }
    if alternatives.is_empty() {
        debug!(path = %path, "all alternatives disabled, dropping term");
        return Ok(None);
    }
    Ok(Some(Term::match_one(alternatives)))
}

fn parse_term_object(
    flags: &FeatureFlags,
    path: &str,
    value: &Value,
) -> GrammarResult<Option<Term>> {
    let validated = term_schema().validate(path, value)?;

    if let Some(condition) = validated.get_str("enable-if") {
        if !flags.is_enabled(condition) {
            debug!(path = %path, condition = %condition, "term disabled, dropping");
            return Ok(None);
        }
    }

    let metadata = TermMetadata {
        settings_flag: validated.get_string("settings-flag"),
        status: validated.get_string("status"),
        aliased_to: validated.get_string("aliased-to"),
    };

    let inner = validated.get("value").expect("required by schema");
    match inner {
        Value::String(text) => {
            if let Some(kind) = validated.get_str("kind") {
                return Err(GrammarError::invalid_term(
                    path,
                    format!("'kind' \"{}\" does not apply to a string value", kind),
                ));
            }
            parse_term_string(path, text, metadata).map(Some)
        }
        Value::Array(items) => {
            match validated.get_str("kind") {
                None => Err(GrammarError::missing_kind(path)),
                Some("match-one") => parse_alternatives(flags, path, items),
                Some(kind) => Err(GrammarError::unknown_kind(path, kind)),
            }
        }
        _ => unreachable!("schema restricts value to string or array"),
    }
}

fn parse_term_string(path: &str, text: &str, metadata: TermMetadata) -> GrammarResult<Term> {
    if text.starts_with('<') {
        if metadata.aliased_to.is_some() || metadata.settings_flag.is_some() {
            return Err(GrammarError::invalid_term(
                path,
                "'aliased-to' and 'settings-flag' only apply to keyword terms",
            ));
        }
        return parse_reference(path, text).map(Term::Reference);
    }

    Ok(Term::Keyword(KeywordTerm {
        name: text.into(),
        aliased_to: metadata.aliased_to.as_deref().map(Into::into),
        internal: metadata.is_internal(),
        settings_flag: metadata.settings_flag,
    }))
}

/// Parse a reference spelling like `<length [0,inf]>` or `<<values>>`.
pub fn parse_reference(path: &str, text: &str) -> GrammarResult<ReferenceTerm> {
    let stripped = text
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(|| {
            GrammarError::invalid_term(path, format!("malformed reference '{}'", text))
        })?;

    let (body, internal) = match stripped
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
    {
        Some(inner) => (inner, true),
        None => (stripped, false),
    };

    let mut tokens = body.split_whitespace();
    let name = tokens.next().ok_or_else(|| {
        GrammarError::invalid_term(path, format!("empty reference '{}'", text))
    })?;
    let parameters: Vec<String> = tokens.map(str::to_string).collect();

    let builtin = cssgen_registry::resolve(name, &parameters)?;

    Ok(ReferenceTerm {
        name: Name::new(name),
        internal,
        parameters,
        builtin,
    })
}
