//! Conventional commit message linter
//!
//! Validates commit messages against a configurable set of rules and, where
//! the fix is mechanical, suggests a corrected message.
//!
//! ```
//! use commit_lint::{suggest_fix, validate_commit};
//!
//! let result = validate_commit("feat: Add login.", None).unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.error_rules(), vec!["subject-case", "subject-full-stop"]);
//!
//! let fixed = suggest_fix("feat: Add login.", None).unwrap();
//! assert_eq!(fixed.as_deref(), Some("feat: add login"));
//! ```

pub mod docs;
pub mod fixer;
pub mod linter;
#[cfg(feature = "cli")]
pub mod reporter;
pub mod rules;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use commit_lint_common::config::DEFAULT_CONFIG_TEMPLATE;
pub use commit_lint_common::parser;
pub use commit_lint_common::{
    Color, ColorConfig, ColorMode, CommitConfig, ConfigError, ConfigValidationError, FieldError,
    LintConfig, ParsedCommit, PartialConfig, SubjectCase, parse, resolve,
};
pub use linter::{Linter, RULE_CATEGORIES, Severity, ValidationIssue, ValidationResult, Violation};
#[cfg(feature = "cli")]
pub use reporter::{OutputFormat, Reporter};

/// Validate a message against `config` merged over the defaults
///
/// The fixer is not run, so `suggestion` is always `None`; use
/// [`suggest_fix`] or [`Linter::validate_with_suggestion`] for one. Fails
/// only when `config` itself is invalid.
pub fn validate_commit(
    message: &str,
    config: Option<&PartialConfig>,
) -> Result<ValidationResult, ConfigValidationError> {
    let linter = Linter::from_partial(config)?;
    Ok(linter.validate(message))
}

/// Corrected message for an invalid `message`
///
/// `Ok(None)` means the message is already valid or cannot be repaired.
pub fn suggest_fix(
    message: &str,
    config: Option<&PartialConfig>,
) -> Result<Option<String>, ConfigValidationError> {
    let linter = Linter::from_partial(config)?;
    Ok(linter.suggest_fix(message))
}
