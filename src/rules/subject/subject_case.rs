use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit, SubjectCase};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "subject-case",
    category: "subject",
    description: "Enforces the casing of the subject's first letter",
    severity: Severity::Error,
    why: r#"Consistent casing makes generated changelogs read as one list.
`subjectCase = "lower"` (the default) expects `add login`,
`"sentence"` expects `Add login`, and `"any"` disables the rule.
Subjects that start with a digit or symbol are not checked."#,
    bad_example: "feat: Add login form",
    good_example: "feat: add login form",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if config.subject_case == SubjectCase::Any {
        return None;
    }

    let first = commit.subject.as_deref()?.trim_start().chars().next()?;

    let message = match config.subject_case {
        SubjectCase::Lower if first.is_uppercase() => "subject must start with a lowercase letter",
        SubjectCase::Sentence if first.is_lowercase() => {
            "subject must start with an uppercase letter"
        }
        _ => return None,
    };

    Some(Violation::new(message).at_line(1))
}
