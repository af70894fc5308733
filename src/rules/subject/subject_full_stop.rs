use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "subject-full-stop",
    category: "subject",
    description: "Forbids a trailing full stop in the subject",
    severity: Severity::Error,
    why: r#"The subject is a title, not a sentence. A trailing period wastes
one of the few characters a header has and looks out of place in
changelogs."#,
    bad_example: "fix: handle empty input.",
    good_example: "fix: handle empty input",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if !config.subject_full_stop_forbidden {
        return None;
    }

    if !commit.subject.as_deref()?.trim_end().ends_with('.') {
        return None;
    }

    Some(Violation::new("subject may not end with a full stop").at_line(1))
}
