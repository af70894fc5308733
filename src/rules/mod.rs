//! The fixed, ordered rule table.
//!
//! Rules are plain data: a [`RuleDoc`] plus a check function. They are
//! evaluated in table order and every rule reports at most one issue, so the
//! order of `errors` and `warnings` in a result is always the order below.

pub mod body;
pub mod content;
pub mod footer;
pub mod header;
pub mod subject;

use crate::docs::RuleDoc;
use crate::linter::{Severity, ValidationIssue, Violation};
use crate::{CommitConfig, ParsedCommit};

pub type CheckFn = fn(&ParsedCommit, &CommitConfig) -> Option<Violation>;

/// A single entry of the rule table
pub struct Rule {
    pub doc: &'static RuleDoc,
    pub check: CheckFn,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        self.doc.name
    }

    pub fn category(&self) -> &'static str {
        self.doc.category
    }

    pub fn severity(&self) -> Severity {
        self.doc.severity
    }

    /// Run the check and attach this rule's identity to the result
    pub fn evaluate(&self, commit: &ParsedCommit, config: &CommitConfig) -> Option<ValidationIssue> {
        let violation = (self.check)(commit, config)?;
        tracing::trace!(rule = self.name(), message = %violation.message, "rule fired");

        let issue = ValidationIssue::new(
            self.name(),
            self.category(),
            &violation.message,
            self.severity(),
        );
        Some(match violation.line {
            Some(line) => issue.with_line(line),
            None => issue,
        })
    }
}

/// All rules in evaluation order
pub static RULES: &[Rule] = &[
    Rule {
        doc: &header::type_empty::DOC,
        check: header::type_empty::check,
    },
    Rule {
        doc: &header::type_enum::DOC,
        check: header::type_enum::check,
    },
    Rule {
        doc: &header::scope_empty::DOC,
        check: header::scope_empty::check,
    },
    Rule {
        doc: &subject::subject_empty::DOC,
        check: subject::subject_empty::check,
    },
    Rule {
        doc: &subject::subject_case::DOC,
        check: subject::subject_case::check,
    },
    Rule {
        doc: &subject::subject_full_stop::DOC,
        check: subject::subject_full_stop::check,
    },
    Rule {
        doc: &header::header_max_length::DOC,
        check: header::header_max_length::check,
    },
    Rule {
        doc: &body::body_leading_blank::DOC,
        check: body::body_leading_blank::check,
    },
    Rule {
        doc: &body::body_max_line_length::DOC,
        check: body::body_max_line_length::check,
    },
    Rule {
        doc: &footer::footer_leading_blank::DOC,
        check: footer::footer_leading_blank::check,
    },
    Rule {
        doc: &content::blocked_words::DOC,
        check: content::blocked_words::check,
    },
];

/// Rule ids in evaluation order
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(Rule::name).collect()
}

/// Evaluate every rule against an already parsed commit
pub fn evaluate_all(commit: &ParsedCommit, config: &CommitConfig) -> Vec<ValidationIssue> {
    RULES
        .iter()
        .filter_map(|rule| rule.evaluate(commit, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        assert_eq!(
            rule_names(),
            vec![
                "type-empty",
                "type-enum",
                "scope-empty",
                "subject-empty",
                "subject-case",
                "subject-full-stop",
                "header-max-length",
                "body-leading-blank",
                "body-max-line-length",
                "footer-leading-blank",
                "blocked-words",
            ]
        );
    }

    #[test]
    fn test_only_line_length_is_a_warning() {
        for rule in RULES {
            let expected = if rule.name() == "body-max-line-length" {
                Severity::Warning
            } else {
                Severity::Error
            };
            assert_eq!(rule.severity(), expected, "{}", rule.name());
        }
    }

    #[test]
    fn test_categories_are_known() {
        for rule in RULES {
            assert!(
                crate::RULE_CATEGORIES.contains(&rule.category()),
                "{} has unknown category {}",
                rule.name(),
                rule.category()
            );
        }
    }

    #[test]
    fn test_evaluate_attaches_rule_identity() {
        let commit = crate::parse("Add login");
        let issues = evaluate_all(&commit, &CommitConfig::default());
        let first = &issues[0];
        assert_eq!(first.rule, "type-empty");
        assert_eq!(first.category, "header");
        assert_eq!(first.severity, Severity::Error);
        assert_eq!(first.line, Some(1));
    }
}
