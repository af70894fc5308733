use crate::resolve::{CommitConfig, ConfigValidationError, PartialConfig, resolve};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched by [`LintConfig::find_and_load`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".commit-lint.toml", ".commit-lint.json"];

/// Template written by `commit-lint config init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# commit-lint configuration
# Every key is optional; omitted keys use the defaults shown here.

[rules]
types = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]
require_scope = false
max_header_length = 72
max_line_length = 100
# "lower", "sentence" or "any"
subject_case = "lower"
subject_empty_forbidden = true
subject_full_stop_forbidden = true
body_leading_blank = true
footer_leading_blank = true
blocked_words = []

[color]
# "auto", "always" or "never"
ui = "auto"
error = "red"
warning = "yellow"
"#;

/// Configuration for commit-lint loaded from .commit-lint.toml or .commit-lint.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LintConfig {
    /// Rule settings merged over the built-in defaults
    #[serde(default)]
    pub rules: PartialConfig,
    /// Terminal color settings
    #[serde(default)]
    pub color: ColorConfig,
}

/// Color output configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColorConfig {
    /// Color mode: "auto" (default), "always" or "never"
    #[serde(default)]
    pub ui: ColorMode,
    /// Color used for error labels
    #[serde(default = "default_error_color")]
    pub error: Color,
    /// Color used for warning labels
    #[serde(default = "default_warning_color")]
    pub warning: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            ui: ColorMode::default(),
            error: default_error_color(),
            warning: default_warning_color(),
        }
    }
}

fn default_error_color() -> Color {
    Color::Red
}

fn default_warning_color() -> Color {
    Color::Yellow
}

/// Color mode for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Automatically detect (default) - respects NO_COLOR env and terminal detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Terminal colors available for severity labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config file '{}': {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: ConfigValidationError,
    },
}

impl LintConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load configuration from a file, choosing the format by extension
    ///
    /// The rule settings are resolved once here so that a bad value is
    /// reported against the file that contains it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content).map_err(|e| ConfigError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Self::from_toml_str(&content).map_err(|e| ConfigError::Toml {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        config.commit_config().map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Find a config file in the given directory or its parents
    pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
        // A relative path like `.` runs out of components after one pop.
        let mut current = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find and load the nearest config file
    ///
    /// Returns `Ok(None)` when no file exists. A file that exists but cannot
    /// be read or is invalid is an error rather than silently ignored.
    pub fn find_and_load(dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        match Self::find_config_file(dir) {
            Some(path) => {
                let config = Self::from_file(&path)?;
                Ok(Some((path, config)))
            }
            None => Ok(None),
        }
    }

    /// Resolve the rule settings against the defaults
    pub fn commit_config(&self) -> Result<CommitConfig, ConfigValidationError> {
        resolve(Some(&self.rules))
    }

    /// Get the color mode setting
    pub fn color_mode(&self) -> ColorMode {
        self.color.ui
    }

    /// JSON Schema describing the config file
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(LintConfig)).unwrap_or_default()
    }
}
