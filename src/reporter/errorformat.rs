use crate::{Color, ColorConfig, Severity, ValidationIssue, ValidationResult};
use colored::{ColoredString, Colorize};

/// `file:line: severity[category/rule]: message` lines, a summary and the
/// suggestion block
pub(crate) fn format(result: &ValidationResult, label: &str, colors: &ColorConfig) -> String {
    let mut lines: Vec<String> = result
        .issues()
        .map(|issue| {
            let color = match issue.severity {
                Severity::Error => colors.error,
                Severity::Warning => colors.warning,
            };
            let tag = apply_color(&tag(issue), color).bold();
            format!("{}: {}: {}", location(issue, label), tag, issue.message)
        })
        .collect();

    if let Some(summary) = summary(result) {
        lines.push(String::new());
        lines.push(summary);
    }

    if let Some(suggestion) = &result.suggestion {
        lines.push(String::new());
        lines.push("suggestion:".green().bold().to_string());
        lines.extend(suggestion.split('\n').map(|line| format!("  {}", line)));
    }

    lines.join("\n")
}

fn location(issue: &ValidationIssue, label: &str) -> String {
    match issue.line {
        Some(line) => format!("{}:{}", label, line),
        None => label.to_string(),
    }
}

fn tag(issue: &ValidationIssue) -> String {
    format!(
        "{}[{}/{}]",
        issue.severity.as_str(),
        issue.category,
        issue.rule
    )
}

fn summary(result: &ValidationResult) -> Option<String> {
    let mut parts = Vec::new();
    if !result.errors.is_empty() {
        parts.push(format!("{} error(s)", result.errors.len()));
    }
    if !result.warnings.is_empty() {
        parts.push(format!("{} warning(s)", result.warnings.len()));
    }

    (!parts.is_empty()).then(|| format!("Found {}", parts.join(", ")))
}

/// Apply a color to a string
fn apply_color(s: &str, color: Color) -> ColoredString {
    match color {
        Color::Black => s.black(),
        Color::Red => s.red(),
        Color::Green => s.green(),
        Color::Yellow => s.yellow(),
        Color::Blue => s.blue(),
        Color::Magenta => s.magenta(),
        Color::Cyan => s.cyan(),
        Color::White => s.white(),
        Color::BrightBlack => s.bright_black(),
        Color::BrightRed => s.bright_red(),
        Color::BrightGreen => s.bright_green(),
        Color::BrightYellow => s.bright_yellow(),
        Color::BrightBlue => s.bright_blue(),
        Color::BrightMagenta => s.bright_magenta(),
        Color::BrightCyan => s.bright_cyan(),
        Color::BrightWhite => s.bright_white(),
    }
}
