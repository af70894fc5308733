use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::parser::{is_blank, split_lines};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "footer-leading-blank",
    category: "footer",
    description: "Requires a blank line before the footer",
    severity: Severity::Error,
    why: r#"Trailers such as `Refs:` or `BREAKING CHANGE:` are only recognised
by git and release tooling when they form their own paragraph."#,
    bad_example: "fix: handle empty input\n\nThe parser used to panic.\nCloses: #12",
    good_example: "fix: handle empty input\n\nThe parser used to panic.\n\nCloses: #12",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if !config.footer_leading_blank {
        return None;
    }

    let footer_line = commit.footer_line?;
    let preceding = split_lines(&commit.raw).nth(footer_line.checked_sub(2)?)?;

    if is_blank(preceding) {
        return None;
    }

    Some(Violation::new("footer must have a leading blank line").at_line(footer_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_blank_line_present() {
        let commit = parse("fix: x\n\nbody\n\nCloses: #1");
        assert!(check(&commit, &CommitConfig::default()).is_none());
    }

    #[test]
    fn test_directly_after_body() {
        let violation =
            check(&parse("fix: x\n\nbody\nCloses: #1"), &CommitConfig::default()).unwrap();
        assert_eq!(violation.line, Some(4));
    }

    #[test]
    fn test_directly_after_header() {
        assert!(check(&parse("fix: x\nCloses: #1"), &CommitConfig::default()).is_some());
    }

    #[test]
    fn test_no_footer() {
        assert!(check(&parse("fix: x\n\nbody"), &CommitConfig::default()).is_none());
    }

    #[test]
    fn test_disabled() {
        let config = CommitConfig {
            footer_leading_blank: false,
            ..CommitConfig::default()
        };
        assert!(check(&parse("fix: x\nCloses: #1"), &config).is_none());
    }
}
