use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "type-empty",
    category: "header",
    description: "Requires the header to start with a commit type",
    severity: Severity::Error,
    why: r#"The type is what changelog generators and release tooling key on.
A header that does not follow `type(scope): subject` cannot be
classified, so the commit is invisible to those tools."#,
    bad_example: "Add login form",
    good_example: "feat: add login form",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, _config: &CommitConfig) -> Option<Violation> {
    let has_type = commit
        .commit_type
        .as_deref()
        .is_some_and(|t| !t.is_empty());

    if has_type {
        return None;
    }

    let message = if commit.header.is_empty() {
        "commit message is empty; expected `type(scope): subject`".to_string()
    } else {
        "type may not be empty; expected `type(scope): subject`".to_string()
    };
    Some(Violation::new(message).at_line(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn run(message: &str) -> Option<Violation> {
        check(&parse(message), &CommitConfig::default())
    }

    #[test]
    fn test_conventional_header_passes() {
        assert!(run("feat: add login").is_none());
        assert!(run("unknown: still has a type").is_none());
    }

    #[test]
    fn test_missing_type() {
        let violation = run("Add new feature").unwrap();
        assert_eq!(violation.line, Some(1));
        assert!(violation.message.starts_with("type may not be empty"));
    }

    #[test]
    fn test_empty_message() {
        let violation = run("").unwrap();
        assert!(violation.message.starts_with("commit message is empty"));
    }

    #[test]
    fn test_leading_whitespace_hides_type() {
        assert!(run("  feat: indented").is_some());
    }
}
