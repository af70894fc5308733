use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "body-max-line-length",
    category: "body",
    description: "Warns about body lines longer than `maxLineLength` characters",
    severity: Severity::Warning,
    why: r#"Commit bodies are read in terminals and email clients that do not
re-wrap text. Long lines are harder to read there, but they do not
make the message invalid, so this is only a warning."#,
    bad_example: "docs: explain config\n\nThis paragraph is written as a single very long line that keeps going well past the point where any terminal would wrap it for you.",
    good_example: "docs: explain config\n\nThis paragraph is wrapped so that every line stays\ncomfortably within the configured limit.",
    fixable: true,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    let body_line = commit.body_line?;
    let max = config.max_line_length;

    let long_lines: Vec<(usize, usize)> = commit
        .body_lines()
        .enumerate()
        .map(|(idx, line)| (body_line + idx, line.chars().count()))
        .filter(|(_, length)| *length > max)
        .collect();

    let (first_line, first_length) = *long_lines.first()?;

    let message = if long_lines.len() == 1 {
        format!(
            "body line must not be longer than {} characters, current length is {}",
            max, first_length
        )
    } else {
        format!(
            "{} body lines are longer than {} characters",
            long_lines.len(),
            max
        )
    };

    Some(Violation::new(message).at_line(first_line))
}
