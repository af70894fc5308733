use crate::{Severity, ValidationResult};
use std::path::Path;

/// Workflow commands (`::error file=...::message`), one per issue, plus a
/// `::notice` carrying the suggestion
pub(crate) fn format(result: &ValidationResult, file: Option<&Path>) -> Vec<String> {
    let file = file.filter(|path| *path != Path::new("-"));

    let mut lines = Vec::new();
    for issue in result.issues() {
        let level = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };

        let mut params = Vec::new();
        if let Some(path) = file {
            params.push(format!("file={}", escape_property(&path.display().to_string())));
            if let Some(line) = issue.line {
                params.push(format!("line={}", line));
            }
        }
        params.push(format!("title={}/{}", issue.category, issue.rule));

        lines.push(format!(
            "::{} {}::{}",
            level,
            params.join(","),
            escape_data(&issue.message)
        ));
    }

    if let Some(suggestion) = &result.suggestion {
        lines.push(format!(
            "::notice title=suggestion::{}",
            escape_data(suggestion)
        ));
    }
    lines
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
