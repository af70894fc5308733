use super::Cli;
use super::input::{InputError, MessageSource, write_message};
use colored::control;
use commit_lint::{ColorMode, LintConfig, Linter, Reporter, ValidationResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Outcome of checking a single message
struct Checked {
    source: MessageSource,
    message: String,
    result: ValidationResult,
}

fn check_source(source: MessageSource, linter: &Linter) -> Result<Checked, InputError> {
    let message = source.read()?;
    let result = linter.validate_with_suggestion(&message);
    tracing::debug!(
        source = ?source.path(),
        valid = result.valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "checked message"
    );
    Ok(Checked {
        source,
        message,
        result,
    })
}

/// Load the explicit config file, or the nearest one above the working directory
fn load_config(cli: &Cli) -> Result<Option<(PathBuf, LintConfig)>, commit_lint::ConfigError> {
    match &cli.config {
        Some(path) => LintConfig::from_file(path).map(|config| Some((path.clone(), config))),
        None => LintConfig::find_and_load(Path::new(".")),
    }
}

fn configure_colors(cli: &Cli, config: Option<&LintConfig>) {
    // CLI flags take precedence over config
    if cli.color {
        control::set_override(true);
    } else if cli.no_color {
        control::set_override(false);
    } else if let Some(config) = config {
        match config.color_mode() {
            ColorMode::Always => control::set_override(true),
            ColorMode::Never => control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

pub fn run_lint(cli: Cli) -> ExitCode {
    // 1. Load configuration
    let lint_config = match load_config(&cli) {
        Ok(Some((path, config))) => {
            if cli.verbose {
                eprintln!("Using config: {}", path.display());
            }
            Some(config)
        }
        Ok(None) => None,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    // 2. Resolve rule settings
    let linter = match lint_config.as_ref().map(LintConfig::commit_config) {
        Some(Ok(config)) => Linter::new(config),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
        None => Linter::default(),
    };
    tracing::debug!(config = ?linter.config(), "resolved config");

    // 3. Reporter
    configure_colors(&cli, lint_config.as_ref());
    let color_config = lint_config.map(|c| c.color).unwrap_or_default();
    let reporter = Reporter::with_colors(cli.format.into(), color_config);

    // 4. Collect message sources
    let sources = MessageSource::collect(cli.message.as_deref(), &cli.files);
    if cli.write
        && sources
            .iter()
            .any(|source| !matches!(source, MessageSource::File(_)))
    {
        eprintln!("Error: --write needs message files, not -m or stdin");
        return ExitCode::from(1);
    }

    if cli.verbose {
        eprintln!("Linting {} message(s)", sources.len());
    }

    // 5. Check messages in parallel, report in input order
    let results: Vec<Result<Checked, InputError>> = sources
        .into_par_iter()
        .map(|source| check_source(source, &linter))
        .collect();

    let mut failed = false;
    for result in results {
        let checked = match result {
            Ok(checked) => checked,
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
                continue;
            }
        };

        let outcome = if cli.fix {
            apply_fix(&cli, &linter, &checked)
        } else {
            reporter.report(&checked.result, checked.source.path());
            Ok(has_issues(&checked.result, cli.fail_on_warnings))
        };

        match outcome {
            Ok(issues) => failed |= issues,
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Print or write the corrected message; returns whether issues remain
fn apply_fix(cli: &Cli, linter: &Linter, checked: &Checked) -> Result<bool, InputError> {
    let fixed = checked.result.suggestion.as_deref();

    match (&checked.source, fixed) {
        (MessageSource::File(path), Some(fixed)) if cli.write => {
            write_message(path, fixed)?;
            eprintln!("Fixed {}", path.display());
        }
        (MessageSource::File(_), None) if cli.write => {}
        _ => println!("{}", fixed.unwrap_or(checked.message.as_str())),
    }

    let remaining = match fixed {
        Some(fixed) => linter.validate(fixed),
        None => checked.result.clone(),
    };
    if !remaining.valid {
        for issue in &remaining.errors {
            eprintln!("{}: {}", issue.rule, issue.message);
        }
    }
    Ok(has_issues(&remaining, cli.fail_on_warnings))
}

fn has_issues(result: &ValidationResult, fail_on_warnings: bool) -> bool {
    !result.valid || (fail_on_warnings && !result.warnings.is_empty())
}
