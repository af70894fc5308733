use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "scope-empty",
    category: "header",
    description: "Requires a scope when `requireScope` is enabled",
    severity: Severity::Error,
    why: r#"In repositories with many packages or components the scope tells
reviewers and changelogs which part of the code a commit touches.
Only active when `requireScope = true`."#,
    bad_example: "fix: handle empty input",
    good_example: "fix(parser): handle empty input",
    fixable: false,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if !config.require_scope || commit.scope.is_some() {
        return None;
    }

    Some(Violation::new("scope may not be empty").at_line(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn requiring_scope() -> CommitConfig {
        CommitConfig {
            require_scope: true,
            ..CommitConfig::default()
        }
    }

    #[test]
    fn test_not_required_by_default() {
        assert!(check(&parse("fix: x"), &CommitConfig::default()).is_none());
    }

    #[test]
    fn test_missing_scope() {
        let violation = check(&parse("fix: x"), &requiring_scope()).unwrap();
        assert_eq!(violation.message, "scope may not be empty");
    }

    #[test]
    fn test_scope_present() {
        assert!(check(&parse("fix(cli): x"), &requiring_scope()).is_none());
    }
}
