mod errorformat;
mod github_actions;
mod json;

use crate::{ColorConfig, ValidationResult};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    ErrorFormat,
    Json,
    GithubActions,
}

pub struct Reporter {
    format: OutputFormat,
    colors: ColorConfig,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colors: ColorConfig::default(),
        }
    }

    pub fn with_colors(format: OutputFormat, colors: ColorConfig) -> Self {
        Self { format, colors }
    }

    /// Render the result for one message; `file` is `None` for `-m` input
    pub fn render(&self, result: &ValidationResult, file: Option<&Path>) -> String {
        let label = source_label(file);
        match self.format {
            OutputFormat::ErrorFormat => errorformat::format(result, &label, &self.colors),
            OutputFormat::Json => json::format(result, &label),
            OutputFormat::GithubActions => github_actions::format(result, file).join("\n"),
        }
    }

    pub fn report(&self, result: &ValidationResult, file: Option<&Path>) {
        let output = self.render(result, file);
        if !output.is_empty() {
            println!("{}", output);
        }
    }
}

fn source_label(file: Option<&Path>) -> String {
    match file {
        Some(path) if path == Path::new("-") => "<stdin>".to_string(),
        Some(path) => path.display().to_string(),
        None => "<message>".to_string(),
    }
}
