//! Rule documentation for commit-lint
//!
//! Every rule carries a [`RuleDoc`] explaining why it exists, with a bad and
//! a good example message. The `why` subcommand renders these.

pub use commit_lint_common::docs::RuleDoc;

use crate::rules::RULES;

/// Get documentation for a rule by name
pub fn get_rule_doc(name: &str) -> Option<&'static RuleDoc> {
    RULES.iter().map(|rule| rule.doc).find(|doc| doc.name == name)
}

/// Get all rule documentation, in evaluation order
pub fn all_rule_docs() -> Vec<&'static RuleDoc> {
    RULES.iter().map(|rule| rule.doc).collect()
}

/// Get all rule names
pub fn all_rule_names() -> Vec<&'static str> {
    all_rule_docs().iter().map(|doc| doc.name).collect()
}
