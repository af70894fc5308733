//! Parsed representation of a commit message.
//!
//! [`ParsedCommit`] is the only output of the parser. Every derived field is
//! `None` when the corresponding part is absent from the message; there is no
//! separate "empty" state.

use serde::{Deserialize, Serialize};

/// A commit message split into its conventional parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommit {
    /// The message exactly as it was given to the parser.
    pub raw: String,
    /// First line of the message with trailing whitespace removed.
    pub header: String,
    /// Commit type (`feat`, `fix`, ...) when the header matches the grammar.
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Scope between the parentheses, e.g. `parser` in `feat(parser): ...`.
    pub scope: Option<String>,
    /// `!` in the header or a `BREAKING CHANGE:` footer entry.
    pub is_breaking: bool,
    /// Text after the header's colon.
    pub subject: Option<String>,
    /// Free text between the header and the footer.
    pub body: Option<String>,
    /// Trailing block of `token: value` lines.
    pub footer: Option<String>,
    /// 1-based line number in `raw` where the body starts.
    pub body_line: Option<usize>,
    /// 1-based line number in `raw` where the footer starts.
    pub footer_line: Option<usize>,
}

/// A single `token: value` footer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterEntry<'a> {
    pub token: &'a str,
    pub value: &'a str,
}

impl ParsedCommit {
    /// Whether the header matched `type(scope)!: subject`.
    pub fn is_conventional(&self) -> bool {
        self.commit_type.is_some()
    }

    /// Lines of the body, if any.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.as_deref().unwrap_or("").lines()
    }

    /// Footer entries in order of appearance.
    pub fn footer_entries(&self) -> impl Iterator<Item = FooterEntry<'_>> {
        self.footer
            .as_deref()
            .unwrap_or("")
            .lines()
            .filter_map(|line| {
                let (token, value) = line.split_once(':')?;
                Some(FooterEntry {
                    token,
                    value: value.trim_start(),
                })
            })
    }

    /// Description attached to a `BREAKING CHANGE:` footer entry.
    pub fn breaking_description(&self) -> Option<&str> {
        self.footer_entries()
            .find(|entry| is_breaking_token(entry.token))
            .map(|entry| entry.value)
    }
}

pub(crate) fn is_breaking_token(token: &str) -> bool {
    token == "BREAKING CHANGE" || token == "BREAKING-CHANGE"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_with_footer(footer: &str) -> ParsedCommit {
        ParsedCommit {
            footer: Some(footer.to_string()),
            ..ParsedCommit::default()
        }
    }

    #[test]
    fn test_footer_entries() {
        let commit = commit_with_footer("Refs: #12\nReviewed-by: Alice");
        let entries: Vec<_> = commit.footer_entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].token, "Refs");
        assert_eq!(entries[0].value, "#12");
        assert_eq!(entries[1].token, "Reviewed-by");
        assert_eq!(entries[1].value, "Alice");
    }

    #[test]
    fn test_breaking_description() {
        let commit = commit_with_footer("Refs: #12\nBREAKING CHANGE: config keys renamed");
        assert_eq!(commit.breaking_description(), Some("config keys renamed"));
    }

    #[test]
    fn test_serialized_field_names() {
        let commit = ParsedCommit {
            header: "feat!: drop node 14".to_string(),
            commit_type: Some("feat".to_string()),
            is_breaking: true,
            ..ParsedCommit::default()
        };
        let json = serde_json::to_value(&commit).unwrap();
        assert_eq!(json["type"], "feat");
        assert_eq!(json["isBreaking"], true);
        assert!(json["scope"].is_null());
    }
}
