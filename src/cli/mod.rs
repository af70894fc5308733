pub mod config;
pub mod input;
pub mod lint;
pub mod why;

use clap::{Parser, Subcommand};
use commit_lint::OutputFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "commit-lint")]
#[command(author, version, about = "Lint conventional commit messages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit message file(s); `-` reads stdin. Defaults to .git/COMMIT_EDITMSG
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Lint this message instead of reading a file
    #[arg(short, long, value_name = "MESSAGE", conflicts_with = "files")]
    pub message: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Print the corrected message instead of the report
    #[arg(long)]
    pub fix: bool,

    /// With --fix, rewrite the message file in place
    #[arg(long, requires = "fix")]
    pub write: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Exit with non-zero code on warnings too
    #[arg(long)]
    pub fail_on_warnings: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// Show detailed documentation for a rule
    Why {
        /// Rule name (e.g., "subject-case")
        rule: Option<String>,

        /// List all available rules
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
    GithubActions,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::ErrorFormat,
            Format::Json => OutputFormat::Json,
            Format::GithubActions => OutputFormat::GithubActions,
        }
    }
}
