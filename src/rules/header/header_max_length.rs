use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "header-max-length",
    category: "header",
    description: "Limits the header to `maxHeaderLength` characters",
    severity: Severity::Error,
    why: r#"Headers are shown in one-line logs, pull request titles and email
subjects, all of which truncate long lines. Details belong in the
body."#,
    bad_example: "feat: add a login form with remember-me support, password reset and rate limiting",
    good_example: "feat: add login form\n\nIncludes remember-me support, password reset and rate limiting.",
    fixable: false,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    let length = commit.header.chars().count();

    if length <= config.max_header_length {
        return None;
    }

    Some(
        Violation::new(format!(
            "header must not be longer than {} characters, current length is {}",
            config.max_header_length, length
        ))
        .at_line(1),
    )
}
