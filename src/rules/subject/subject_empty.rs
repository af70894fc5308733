use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "subject-empty",
    category: "subject",
    description: "Requires a non-blank subject after the colon",
    severity: Severity::Error,
    why: r#"The subject is the one-line summary of the change. A header
that only names a type tells readers nothing about what changed."#,
    bad_example: "fix:",
    good_example: "fix: reject empty usernames",
    fixable: false,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if !config.subject_empty_forbidden {
        return None;
    }

    let has_subject = commit
        .subject
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());

    if has_subject {
        return None;
    }

    Some(Violation::new("subject may not be empty").at_line(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_subject_present() {
        assert!(check(&parse("fix: x"), &CommitConfig::default()).is_none());
    }

    #[test]
    fn test_missing_subject() {
        assert!(check(&parse("fix:"), &CommitConfig::default()).is_some());
        assert!(check(&parse("fix:    "), &CommitConfig::default()).is_some());
    }

    #[test]
    fn test_unparsed_header_has_no_subject() {
        assert!(check(&parse("Add new feature"), &CommitConfig::default()).is_some());
    }

    #[test]
    fn test_allowed_when_disabled() {
        let config = CommitConfig {
            subject_empty_forbidden: false,
            ..CommitConfig::default()
        };
        assert!(check(&parse("fix:"), &config).is_none());
    }
}
