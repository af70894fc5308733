use crate::{ValidationIssue, ValidationResult};

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    valid: bool,
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
    suggestion: Option<&'a str>,
    summary: Summary,
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

pub(crate) fn format(result: &ValidationResult, label: &str) -> String {
    let report = JsonReport {
        file: label,
        valid: result.valid,
        errors: &result.errors,
        warnings: &result.warnings,
        suggestion: result.suggestion.as_deref(),
        summary: Summary {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        },
    };

    // Plain strings, integers and enums only; serialization cannot fail.
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
