//! Conventional commit message parser
//!
//! This crate splits a raw commit message into header, body and footer and
//! extracts the `type(scope)!: subject` components of the header. Parsing
//! never fails: anything that does not fit the grammar degrades to `None`
//! fields, so lint rules can report on it.
//!
//! # Quick Start
//!
//! ```
//! use commit_lint_parser::parse;
//!
//! let commit = parse("feat(parser)!: accept scopes\n\nLonger explanation.\n\nRefs: #42");
//!
//! assert_eq!(commit.commit_type.as_deref(), Some("feat"));
//! assert_eq!(commit.scope.as_deref(), Some("parser"));
//! assert!(commit.is_breaking);
//! assert_eq!(commit.subject.as_deref(), Some("accept scopes"));
//! assert_eq!(commit.body.as_deref(), Some("Longer explanation."));
//! assert_eq!(commit.footer.as_deref(), Some("Refs: #42"));
//! ```
//!
//! Headers outside the grammar keep their text but lose derived fields:
//!
//! ```
//! # use commit_lint_parser::parse;
//! let commit = parse("Add new feature");
//! assert_eq!(commit.header, "Add new feature");
//! assert_eq!(commit.commit_type, None);
//! assert_eq!(commit.subject, None);
//! ```
//!
//! # Modules
//!
//! - [`ast`] — [`ParsedCommit`] and footer helpers
//! - [`header`] — the header grammar scanner ([`header::parse_header`])

pub mod ast;
pub mod header;

pub use ast::{FooterEntry, ParsedCommit};

use ast::is_breaking_token;

/// Parse a raw commit message.
pub fn parse(raw: &str) -> ParsedCommit {
    if raw.trim().is_empty() {
        return ParsedCommit {
            raw: raw.to_string(),
            ..ParsedCommit::default()
        };
    }

    let mut lines = split_lines(raw);
    let header = lines.next().unwrap_or("").trim_end();
    let rest: Vec<&str> = lines.collect();

    let mut commit = ParsedCommit {
        raw: raw.to_string(),
        header: header.to_string(),
        ..ParsedCommit::default()
    };

    if let Some(parsed) = header::parse_header(header) {
        commit.commit_type = Some(parsed.commit_type.to_string());
        commit.scope = parsed.scope.map(str::to_string);
        commit.is_breaking = parsed.breaking;
        commit.subject = Some(parsed.subject.to_string()).filter(|s| !s.is_empty());
    }

    let sections = Sections::locate(&rest);

    if let Some((start, end)) = sections.body {
        commit.body = Some(rest[start..end].join("\n"));
        commit.body_line = Some(start + 2);
    }

    if let Some((start, end)) = sections.footer {
        let footer = &rest[start..end];
        if footer.iter().any(|line| is_breaking_line(line)) {
            commit.is_breaking = true;
        }
        commit.footer = Some(footer.join("\n"));
        commit.footer_line = Some(start + 2);
    }

    commit
}

/// Split on `\n`, tolerating `\r\n` line endings.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Whether a line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether a line looks like a `token: value` footer entry.
pub fn is_footer_line(line: &str) -> bool {
    if is_breaking_line(line) {
        return true;
    }

    let Some((token, value)) = line.split_once(':') else {
        return false;
    };

    !token.is_empty()
        && token.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '-')
        && value.starts_with(char::is_whitespace)
}

fn is_breaking_line(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(token, _)| is_breaking_token(token))
}

/// Body and footer ranges within the lines following the header.
///
/// Ranges are half-open indices into that slice.
#[derive(Debug, Default, PartialEq, Eq)]
struct Sections {
    body: Option<(usize, usize)>,
    footer: Option<(usize, usize)>,
}

impl Sections {
    fn locate(rest: &[&str]) -> Self {
        let Some(last) = rest.iter().rposition(|line| !is_blank(line)) else {
            return Self::default();
        };
        let content_end = last + 1;

        let mut footer_start = content_end;
        while footer_start > 0 && is_footer_line(rest[footer_start - 1]) {
            footer_start -= 1;
        }

        let footer = (footer_start < content_end).then_some((footer_start, content_end));

        let body_start = rest[..footer_start]
            .iter()
            .position(|line| !is_blank(line));
        let body = body_start.map(|start| {
            let end = rest[..footer_start]
                .iter()
                .rposition(|line| !is_blank(line))
                .map_or(footer_start, |idx| idx + 1);
            (start, end)
        });

        Self { body, footer }
    }
}
