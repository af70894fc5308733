use clap::Subcommand;
use commit_lint::{ConfigError, DEFAULT_CONFIG_TEMPLATE, LintConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Generate a default .commit-lint.toml configuration file
    Init {
        /// Output path for the configuration file
        #[arg(short, long, default_value = ".commit-lint.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = ".commit-lint.toml")]
        config: PathBuf,
    },
    /// Print the JSON Schema of the configuration file
    Schema,
}

pub fn run_config(command: &ConfigCommands) -> ExitCode {
    match command {
        ConfigCommands::Init { output, force } => run_init(output, *force),
        ConfigCommands::Validate { config } => run_validate(config),
        ConfigCommands::Schema => run_schema(),
    }
}

fn run_init(output: &Path, force: bool) -> ExitCode {
    if output.exists() && !force {
        eprintln!(
            "Error: {} already exists. Use --force to overwrite.",
            output.display()
        );
        return ExitCode::from(1);
    }

    match fs::write(output, DEFAULT_CONFIG_TEMPLATE) {
        Ok(()) => {
            eprintln!("Created {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output.display(), e);
            ExitCode::from(1)
        }
    }
}

fn run_validate(config_path: &Path) -> ExitCode {
    if !config_path.exists() {
        eprintln!("Error: {} not found", config_path.display());
        return ExitCode::from(1);
    }

    match LintConfig::from_file(config_path) {
        Ok(_) => {
            eprintln!("{}: OK", config_path.display());
            ExitCode::SUCCESS
        }
        Err(ConfigError::Invalid { path, source }) if !source.field_errors().is_empty() => {
            let errors = source.field_errors();
            eprintln!("{}:", path.display());
            for error in errors {
                eprintln!("  - {}", error);
            }
            eprintln!("\nFound {} error(s)", errors.len());
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run_schema() -> ExitCode {
    match serde_json::to_string_pretty(&LintConfig::json_schema()) {
        Ok(schema) => {
            println!("{}", schema);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
