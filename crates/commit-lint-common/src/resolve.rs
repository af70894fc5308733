//! Commit convention settings and their resolution against defaults.
//!
//! Callers hand in a [`PartialConfig`] where every field is optional.
//! [`resolve`] fills the gaps from [`CommitConfig::default`] and rejects any
//! explicitly supplied value that is out of range. Omitted fields are the
//! only thing that silently falls back to a default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Commit types accepted when the config does not list its own.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Required casing of the subject's first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCase {
    /// First letter must be lowercase
    #[default]
    Lower,
    /// First letter must be uppercase
    Sentence,
    /// No casing requirement
    Any,
}

impl SubjectCase {
    pub const VARIANTS: &'static [&'static str] = &["lower", "sentence", "any"];

    pub fn as_str(self) -> &'static str {
        match self {
            SubjectCase::Lower => "lower",
            SubjectCase::Sentence => "sentence",
            SubjectCase::Any => "any",
        }
    }
}

impl fmt::Display for SubjectCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubjectCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(SubjectCase::Lower),
            "sentence" => Ok(SubjectCase::Sentence),
            "any" => Ok(SubjectCase::Any),
            _ => Err(format!(
                "invalid subject case '{}', expected one of: {}",
                s,
                SubjectCase::VARIANTS.join(", ")
            )),
        }
    }
}

/// Fully resolved settings used by every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitConfig {
    pub types: Vec<String>,
    pub require_scope: bool,
    pub max_header_length: usize,
    pub max_line_length: usize,
    pub subject_case: SubjectCase,
    pub subject_empty_forbidden: bool,
    pub subject_full_stop_forbidden: bool,
    pub body_leading_blank: bool,
    pub footer_leading_blank: bool,
    pub blocked_words: Vec<String>,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            require_scope: false,
            max_header_length: 72,
            max_line_length: 100,
            subject_case: SubjectCase::Lower,
            subject_empty_forbidden: true,
            subject_full_stop_forbidden: true,
            body_leading_blank: true,
            footer_leading_blank: true,
            blocked_words: Vec::new(),
        }
    }
}

impl CommitConfig {
    /// Whether `commit_type` is one of the configured types.
    pub fn allows_type(&self, commit_type: &str) -> bool {
        self.types.iter().any(|t| t == commit_type)
    }
}

/// User-supplied overrides, as read from a config file or a JS object.
///
/// Lengths are signed and the subject case is a plain string so that
/// out-of-range values survive deserialization and are reported by
/// [`resolve`] with the offending field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartialConfig {
    /// Allowed commit types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Require a `(scope)` in the header
    #[serde(default, alias = "require_scope", skip_serializing_if = "Option::is_none")]
    pub require_scope: Option<bool>,
    /// Maximum header length in characters
    #[serde(default, alias = "max_header_length", skip_serializing_if = "Option::is_none")]
    pub max_header_length: Option<i64>,
    /// Maximum body line length in characters
    #[serde(default, alias = "max_line_length", skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<i64>,
    /// "lower", "sentence" or "any"
    #[serde(default, alias = "subject_case", skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<String>,
    #[serde(default, alias = "subject_empty_forbidden", skip_serializing_if = "Option::is_none")]
    pub subject_empty_forbidden: Option<bool>,
    #[serde(default, alias = "subject_full_stop_forbidden", skip_serializing_if = "Option::is_none")]
    pub subject_full_stop_forbidden: Option<bool>,
    #[serde(default, alias = "body_leading_blank", skip_serializing_if = "Option::is_none")]
    pub body_leading_blank: Option<bool>,
    #[serde(default, alias = "footer_leading_blank", skip_serializing_if = "Option::is_none")]
    pub footer_leading_blank: Option<bool>,
    /// Words rejected anywhere in the message (whole word, case-insensitive)
    #[serde(default, alias = "blocked_words", skip_serializing_if = "Option::is_none")]
    pub blocked_words: Option<Vec<String>>,
}

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raised when an explicitly supplied config value is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// The document could not be read as a partial config at all
    /// (wrong value types, invalid syntax).
    #[error("invalid config: {0}")]
    Malformed(String),

    /// One or more fields are out of range.
    #[error("invalid config: {}", join_field_errors(.0))]
    Invalid(Vec<FieldError>),
}

impl ConfigValidationError {
    /// Field-level errors, empty for [`Malformed`](Self::Malformed).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ConfigValidationError::Malformed(_) => &[],
            ConfigValidationError::Invalid(errors) => errors,
        }
    }

    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.field_errors().iter().any(|e| e.field == field)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl PartialConfig {
    /// Read a partial config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigValidationError> {
        serde_json::from_str(json).map_err(|e| ConfigValidationError::Malformed(e.to_string()))
    }

    /// Read a partial config from an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigValidationError> {
        if !value.is_object() {
            return Err(ConfigValidationError::Malformed(format!(
                "expected an object, found {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ConfigValidationError::Malformed(e.to_string()))
    }

    /// Read a partial config from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigValidationError> {
        toml::from_str(content).map_err(|e| ConfigValidationError::Malformed(e.to_string()))
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &PartialConfig::default()
    }

    /// Merge these overrides onto `base`, validating every supplied field.
    ///
    /// All invalid fields are collected before failing.
    pub fn merge_onto(&self, base: CommitConfig) -> Result<CommitConfig, ConfigValidationError> {
        let mut errors = Vec::new();
        let mut config = base;

        if let Some(types) = &self.types {
            match validate_types(types) {
                Ok(()) => config.types = types.clone(),
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = self.require_scope {
            config.require_scope = value;
        }

        if let Some(value) = self.max_header_length {
            match validate_length("maxHeaderLength", value) {
                Ok(length) => config.max_header_length = length,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = self.max_line_length {
            match validate_length("maxLineLength", value) {
                Ok(length) => config.max_line_length = length,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = &self.subject_case {
            match value.parse::<SubjectCase>() {
                Ok(case) => config.subject_case = case,
                Err(message) => errors.push(FieldError::new("subjectCase", message)),
            }
        }

        if let Some(value) = self.subject_empty_forbidden {
            config.subject_empty_forbidden = value;
        }
        if let Some(value) = self.subject_full_stop_forbidden {
            config.subject_full_stop_forbidden = value;
        }
        if let Some(value) = self.body_leading_blank {
            config.body_leading_blank = value;
        }
        if let Some(value) = self.footer_leading_blank {
            config.footer_leading_blank = value;
        }

        if let Some(words) = &self.blocked_words {
            if words.iter().any(|w| w.trim().is_empty()) {
                errors.push(FieldError::new(
                    "blockedWords",
                    "entries must not be empty",
                ));
            } else {
                config.blocked_words = words.clone();
            }
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigValidationError::Invalid(errors))
        }
    }
}

fn validate_types(types: &[String]) -> Result<(), FieldError> {
    if types.is_empty() {
        return Err(FieldError::new("types", "must list at least one type"));
    }

    for commit_type in types {
        if commit_type.is_empty() {
            return Err(FieldError::new("types", "entries must not be empty"));
        }
        if commit_type
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '(' | ')' | '!' | ':'))
        {
            return Err(FieldError::new(
                "types",
                format!("'{}' is not a valid commit type", commit_type),
            ));
        }
    }

    Ok(())
}

fn validate_length(field: &'static str, value: i64) -> Result<usize, FieldError> {
    if value < 1 {
        return Err(FieldError::new(
            field,
            format!("must be a positive integer, got {}", value),
        ));
    }
    usize::try_from(value).map_err(|_| FieldError::new(field, "value is too large"))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Merge `partial` over the built-in defaults.
pub fn resolve(partial: Option<&PartialConfig>) -> Result<CommitConfig, ConfigValidationError> {
    let config = match partial {
        Some(partial) => partial.merge_onto(CommitConfig::default())?,
        None => CommitConfig::default(),
    };
    tracing::debug!(?config, "resolved commit config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = resolve(None).unwrap();
        assert_eq!(config.types.len(), DEFAULT_TYPES.len());
        assert!(config.allows_type("feat"));
        assert!(!config.require_scope);
        assert_eq!(config.max_header_length, 72);
        assert_eq!(config.max_line_length, 100);
        assert_eq!(config.subject_case, SubjectCase::Lower);
        assert!(config.subject_empty_forbidden);
        assert!(config.subject_full_stop_forbidden);
        assert!(config.body_leading_blank);
        assert!(config.footer_leading_blank);
        assert!(config.blocked_words.is_empty());
    }

    #[test]
    fn test_empty_partial_equals_defaults() {
        let partial = PartialConfig::default();
        assert!(partial.is_empty());
        assert_eq!(resolve(Some(&partial)).unwrap(), CommitConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let partial = PartialConfig {
            types: Some(vec!["feat".to_string(), "fix".to_string()]),
            require_scope: Some(true),
            max_header_length: Some(50),
            subject_case: Some("sentence".to_string()),
            blocked_words: Some(vec!["wip".to_string()]),
            ..PartialConfig::default()
        };
        let config = resolve(Some(&partial)).unwrap();
        assert_eq!(config.types, vec!["feat", "fix"]);
        assert!(config.require_scope);
        assert_eq!(config.max_header_length, 50);
        assert_eq!(config.max_line_length, 100);
        assert_eq!(config.subject_case, SubjectCase::Sentence);
        assert_eq!(config.blocked_words, vec!["wip"]);
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let partial = PartialConfig {
            max_header_length: Some(-1),
            ..PartialConfig::default()
        };
        let err = resolve(Some(&partial)).unwrap_err();
        assert!(err.has_field("maxHeaderLength"));
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let partial = PartialConfig {
            max_line_length: Some(0),
            ..PartialConfig::default()
        };
        let err = resolve(Some(&partial)).unwrap_err();
        assert!(err.has_field("maxLineLength"));
    }

    #[test]
    fn test_unknown_subject_case_is_rejected() {
        let partial = PartialConfig {
            subject_case: Some("upper".to_string()),
            ..PartialConfig::default()
        };
        let err = resolve(Some(&partial)).unwrap_err();
        assert!(err.has_field("subjectCase"));
        assert!(err.to_string().contains("upper"));
    }

    #[test]
    fn test_invalid_types_are_rejected() {
        for types in [vec![], vec!["".to_string()], vec!["fe at".to_string()]] {
            let partial = PartialConfig {
                types: Some(types),
                ..PartialConfig::default()
            };
            let err = resolve(Some(&partial)).unwrap_err();
            assert!(err.has_field("types"));
        }
    }

    #[test]
    fn test_blank_blocked_word_is_rejected() {
        let partial = PartialConfig {
            blocked_words: Some(vec!["wip".to_string(), "  ".to_string()]),
            ..PartialConfig::default()
        };
        let err = resolve(Some(&partial)).unwrap_err();
        assert!(err.has_field("blockedWords"));
    }

    #[test]
    fn test_all_invalid_fields_are_reported() {
        let partial = PartialConfig {
            max_header_length: Some(-5),
            max_line_length: Some(-5),
            subject_case: Some("title".to_string()),
            ..PartialConfig::default()
        };
        let err = resolve(Some(&partial)).unwrap_err();
        assert_eq!(err.field_errors().len(), 3);
    }

    #[test]
    fn test_from_json_camel_case() {
        let partial =
            PartialConfig::from_json_str(r#"{"requireScope": true, "maxLineLength": 80}"#).unwrap();
        assert_eq!(partial.require_scope, Some(true));
        assert_eq!(partial.max_line_length, Some(80));
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let partial = PartialConfig::from_json_str(r#"{"extends": "base", "types": ["feat"]}"#)
            .unwrap();
        assert_eq!(partial.types, Some(vec!["feat".to_string()]));
    }

    #[test]
    fn test_from_json_non_array_types() {
        let err = PartialConfig::from_json_str(r#"{"types": "feat"}"#).unwrap_err();
        assert!(matches!(err, ConfigValidationError::Malformed(_)));
    }

    #[test]
    fn test_from_json_value_requires_object() {
        let err = PartialConfig::from_json_value(serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ConfigValidationError::Malformed("expected an object, found an array".to_string())
        );
    }

    #[test]
    fn test_from_toml_snake_case_aliases() {
        let partial = PartialConfig::from_toml_str(
            r#"
require_scope = true
max_header_length = 60
subject_case = "any"
"#,
        )
        .unwrap();
        let config = resolve(Some(&partial)).unwrap();
        assert!(config.require_scope);
        assert_eq!(config.max_header_length, 60);
        assert_eq!(config.subject_case, SubjectCase::Any);
    }

    #[test]
    fn test_subject_case_round_trip_names() {
        for name in SubjectCase::VARIANTS {
            let case: SubjectCase = name.parse().unwrap();
            assert_eq!(case.to_string(), *name);
        }
    }
}
