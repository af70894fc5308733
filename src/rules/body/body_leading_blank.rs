use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "body-leading-blank",
    category: "body",
    description: "Requires a blank line between the header and the body",
    severity: Severity::Error,
    why: r#"Git treats everything up to the first blank line as the subject.
Without the separator, tools such as `git log --oneline` and
`git format-patch` merge the body into the header."#,
    bad_example: "fix: handle empty input\nThe parser used to panic on empty strings.",
    good_example: "fix: handle empty input\n\nThe parser used to panic on empty strings.",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if !config.body_leading_blank || commit.body.is_none() {
        return None;
    }

    // The body starts on the first non-blank line after the header, so it
    // sitting on line 2 means nothing separates it from the header.
    if commit.body_line != Some(2) {
        return None;
    }

    Some(Violation::new("body must have a leading blank line").at_line(2))
}
