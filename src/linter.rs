use crate::fixer::Fixer;
use crate::rules::{self, Rule};
use crate::{CommitConfig, ConfigValidationError, ParsedCommit, PartialConfig, parse, resolve};

pub use commit_lint_common::linter::{
    RULE_CATEGORIES, Severity, ValidationIssue, ValidationResult, Violation,
};

/// Validates and repairs commit messages against one resolved config
///
/// Resolving the config is the only fallible step, so callers that check
/// many messages build a `Linter` once and reuse it. A `Linter` holds no
/// state besides its config and is safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: CommitConfig,
}

impl Linter {
    pub fn new(config: CommitConfig) -> Self {
        Self { config }
    }

    /// Resolve `partial` over the defaults and build a linter from it
    pub fn from_partial(partial: Option<&PartialConfig>) -> Result<Self, ConfigValidationError> {
        Ok(Self::new(resolve(partial)?))
    }

    pub fn config(&self) -> &CommitConfig {
        &self.config
    }

    /// Get a reference to all rules
    pub fn rules(&self) -> &'static [Rule] {
        rules::RULES
    }

    /// Parse and validate a message
    pub fn validate(&self, message: &str) -> ValidationResult {
        self.validate_parsed(parse(message))
    }

    /// Validate a message that has already been parsed
    pub fn validate_parsed(&self, parsed: ParsedCommit) -> ValidationResult {
        let issues = rules::evaluate_all(&parsed, &self.config);
        ValidationResult::from_issues(parsed, issues)
    }

    /// Validate and, when invalid, attach the fixer's suggestion
    pub fn validate_with_suggestion(&self, message: &str) -> ValidationResult {
        let result = self.validate(message);
        if result.valid {
            return result;
        }
        let suggestion = self.fixer().repair(message);
        result.with_suggestion(suggestion)
    }

    /// Corrected message, or `None` when the message is already valid or
    /// cannot be repaired
    pub fn suggest_fix(&self, message: &str) -> Option<String> {
        if self.validate(message).valid {
            return None;
        }
        self.fixer().repair(message)
    }

    /// Run the fixer to its fixed point
    ///
    /// Valid messages come back unchanged, so `fix(fix(m)) == fix(m)`.
    /// Returns `None` when the message cannot be made valid.
    pub fn fix(&self, message: &str) -> Option<String> {
        if self.validate(message).valid {
            return Some(message.to_string());
        }
        self.fixer().repair(message)
    }

    fn fixer(&self) -> Fixer<'_> {
        Fixer::new(self)
    }
}
