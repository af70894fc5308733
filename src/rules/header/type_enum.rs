use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "type-enum",
    category: "header",
    description: "Restricts the commit type to the configured list",
    severity: Severity::Error,
    why: r#"A fixed vocabulary of types keeps history searchable and lets
release tooling map each type to a version bump. Typos such as
`feta` or ad-hoc types such as `misc` silently fall through."#,
    bad_example: "feta: add login form",
    good_example: "feat: add login form",
    fixable: false,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    let commit_type = commit.commit_type.as_deref().filter(|t| !t.is_empty())?;

    if config.allows_type(commit_type) {
        return None;
    }

    Some(
        Violation::new(format!(
            "type '{}' is not allowed; expected one of: {}",
            commit_type,
            config.types.join(", ")
        ))
        .at_line(1),
    )
}
