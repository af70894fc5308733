use crate::parser::ParsedCommit;
use serde::{Deserialize, Serialize};

/// Rule categories in display order
pub const RULE_CATEGORIES: &[&str] = &["header", "subject", "body", "footer", "content"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// What a rule reports when it fires
///
/// The engine attaches the rule id, category and severity, so a rule cannot
/// report under a severity other than its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub message: String,
    /// 1-based line the violation points at
    pub line: Option<usize>,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub rule: String,
    pub category: String,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationIssue {
    pub fn new(rule: &str, category: &str, message: &str, severity: Severity) -> Self {
        Self {
            rule: rule.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            severity,
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Outcome of validating one commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` exactly when `errors` is empty
    pub valid: bool,
    pub parsed: ParsedCommit,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    /// Corrected message, filled in by callers that also run the fixer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationResult {
    /// Split issues by severity, keeping their relative order
    pub fn from_issues(parsed: ParsedCommit, issues: Vec<ValidationIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = issues
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        Self {
            valid: errors.is_empty(),
            parsed,
            errors,
            warnings,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }

    /// Errors followed by warnings
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Whether `rule` produced an error or a warning
    pub fn has_issue(&self, rule: &str) -> bool {
        self.issues().any(|issue| issue.rule == rule)
    }

    /// Rule ids of all errors, in rule order
    pub fn error_rules(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.rule.as_str()).collect()
    }
}
