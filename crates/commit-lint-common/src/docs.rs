//! Rule documentation types
//!
//! Each rule carries a static [`RuleDoc`] that explains why it exists and
//! shows a failing and a passing commit message.

use crate::linter::Severity;
use serde::Serialize;

/// Documentation for a lint rule
#[derive(Debug, Serialize)]
pub struct RuleDoc {
    /// Rule name (e.g., "subject-case")
    pub name: &'static str,
    /// Category (e.g., "subject")
    pub category: &'static str,
    /// Short description
    pub description: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Why this rule exists
    pub why: &'static str,
    /// Example of a failing message
    pub bad_example: &'static str,
    /// Example of a passing message
    pub good_example: &'static str,
    /// Whether the fixer can repair violations of this rule
    pub fixable: bool,
}
