//! Best-effort repair of invalid commit messages.
//!
//! The fixer runs a fixed sequence of steps. Each step is triggered by the
//! issues of the current message, rewrites the message text, and is
//! followed by a fresh parse and validation. Rules whose correct value needs
//! human judgement (`type-enum`, `scope-empty`, `header-max-length`,
//! `blocked-words`) have no step, so messages violating them are never
//! "fixed".

mod verbs;
mod wrap;

pub use verbs::{FALLBACK_TYPE, VERB_TYPES, infer_type};
pub use wrap::{wrap_line, wrap_text};

use crate::linter::{Linter, ValidationResult};
use crate::parser::header::{Header, is_type_char, parse_header};
use crate::parser::{is_blank, split_lines};
use crate::rules::body::body_leading_blank;
use crate::rules::footer::footer_leading_blank;
use crate::{CommitConfig, ParsedCommit, SubjectCase};

type StepFn = fn(&str, &ParsedCommit, &CommitConfig) -> Option<String>;

struct FixStep {
    name: &'static str,
    /// Rules whose issues trigger the step; empty means it always runs
    triggers: &'static [&'static str],
    apply: StepFn,
}

impl FixStep {
    fn is_triggered(&self, result: &ValidationResult) -> bool {
        self.triggers.is_empty() || self.triggers.iter().any(|rule| result.has_issue(rule))
    }
}

static STEPS: &[FixStep] = &[
    FixStep {
        name: "normalize-whitespace",
        triggers: &[],
        apply: normalize_whitespace,
    },
    FixStep {
        name: "infer-type",
        triggers: &["type-empty"],
        apply: infer_missing_type,
    },
    FixStep {
        name: "subject-case",
        triggers: &["subject-case"],
        apply: fix_subject_case,
    },
    FixStep {
        name: "subject-full-stop",
        triggers: &["subject-full-stop"],
        apply: strip_full_stop,
    },
    FixStep {
        name: "leading-blank",
        triggers: &["body-leading-blank", "footer-leading-blank"],
        apply: insert_leading_blanks,
    },
    FixStep {
        name: "wrap-body",
        triggers: &["body-max-line-length"],
        apply: wrap_body,
    },
];

/// Runs the repair pipeline with a linter's config
pub struct Fixer<'a> {
    linter: &'a Linter,
}

impl<'a> Fixer<'a> {
    pub fn new(linter: &'a Linter) -> Self {
        Self { linter }
    }

    /// Repair `message`, returning `None` when it cannot be made valid
    ///
    /// The pipeline stops as soon as the message is valid; warnings left at
    /// that point stay in the output.
    pub fn repair(&self, message: &str) -> Option<String> {
        let config = self.linter.config();
        let mut current = message.to_string();
        let mut result = self.linter.validate(&current);

        for step in STEPS {
            if result.valid {
                break;
            }
            if !step.is_triggered(&result) {
                continue;
            }

            let Some(next) = (step.apply)(&current, &result.parsed, config) else {
                tracing::debug!(step = step.name, "fix step not applicable");
                continue;
            };
            if next == current {
                continue;
            }

            tracing::debug!(step = step.name, "applied fix step");
            current = next;
            result = self.linter.validate(&current);
        }

        if result.valid {
            Some(current)
        } else {
            tracing::debug!(remaining = ?result.error_rules(), "message could not be fixed");
            None
        }
    }
}

/// Trim both ends, strip trailing whitespace from every line and collapse
/// runs of blank lines into one
fn normalize_whitespace(message: &str, _: &ParsedCommit, _: &CommitConfig) -> Option<String> {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;

    for line in split_lines(message) {
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(line);
        previous_blank = blank;
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if let Some(first) = lines.first_mut() {
        *first = first.trim_start();
    }

    Some(lines.join("\n"))
}

/// Prefix a type inferred from the subject's leading verb
///
/// A leading `(scope)` already in the text becomes the header's scope:
/// `(auth) add login` turns into `feat(auth): add login`. A header that
/// already starts with a type but has a broken separator (`feat(ui) add`,
/// `feat(): x`, `feat : x`) is rebuilt around that type instead.
fn infer_missing_type(message: &str, parsed: &ParsedCommit, config: &CommitConfig) -> Option<String> {
    let header = parsed.header.trim();
    if let Some(typed) = split_broken_prefix(header) {
        if !config.allows_type(typed.commit_type) {
            return None;
        }
        let subject = typed.subject.trim();
        if subject.is_empty() {
            return None;
        }
        return Some(replace_header(message, &format_header(&typed, subject)));
    }

    let (scope, breaking, rest) = split_leading_scope(header);
    let subject = rest.trim();
    let first_word = subject.split_whitespace().next()?;

    let commit_type = infer_type(first_word);
    if !config.allows_type(commit_type) {
        return None;
    }

    let header = Header {
        commit_type,
        scope,
        breaking,
        subject,
    };
    Some(replace_header(message, &format_header(&header, subject)))
}

/// Split `(scope)!:` off the front of a header that has no type
fn split_leading_scope(header: &str) -> (Option<&str>, bool, &str) {
    let Some(inner) = header.strip_prefix('(') else {
        return (None, false, header);
    };
    let Some((scope, rest)) = inner.split_once(')') else {
        return (None, false, header);
    };
    if scope.trim().is_empty() || scope.contains('(') {
        return (None, false, header);
    }

    let (breaking, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    (Some(scope.trim()), breaking, rest)
}

/// Read `type(scope)!:` off a header the grammar rejected
///
/// Only matches when the leading word is followed directly by `(` or,
/// after optional spaces, by `:`. An empty `()` scope is dropped.
fn split_broken_prefix(header: &str) -> Option<Header<'_>> {
    let end = header.find(|ch: char| !is_type_char(ch)).unwrap_or(header.len());
    let (commit_type, rest) = header.split_at(end);
    if commit_type.is_empty() {
        return None;
    }

    let (scope, has_parens, rest) = match rest.strip_prefix('(') {
        Some(inner) => {
            let (scope, rest) = inner.split_once(')')?;
            if scope.contains('(') {
                return None;
            }
            let scope = scope.trim();
            ((!scope.is_empty()).then_some(scope), true, rest)
        }
        None => (None, false, rest),
    };

    let (breaking, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let (has_colon, rest) = match rest.trim_start().strip_prefix(':') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    // `fix typo` is a subject starting with a verb, not a typed header.
    if !has_parens && !has_colon {
        return None;
    }

    Some(Header {
        commit_type,
        scope,
        breaking,
        subject: rest,
    })
}

/// The single character `mapped` yields; `None` when the mapping expands
/// (`İ` lowercases to two code points, `ß` uppercases to `SS`)
fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let ch = mapped.next()?;
    mapped.next().is_none().then_some(ch)
}

fn fix_subject_case(message: &str, parsed: &ParsedCommit, config: &CommitConfig) -> Option<String> {
    let header = parse_header(&parsed.header)?;
    let subject = header.subject.trim_start();
    let mut chars = subject.chars();
    let first = chars.next()?;

    let first = match config.subject_case {
        SubjectCase::Lower => {
            // Lowercasing `API` or `README` would corrupt the word.
            if subject.split_whitespace().next().is_some_and(is_acronym) {
                return None;
            }
            single_char(first.to_lowercase())?
        }
        SubjectCase::Sentence => single_char(first.to_uppercase())?,
        SubjectCase::Any => return None,
    };

    let subject = format!("{}{}", first, chars.as_str());
    Some(replace_header(message, &format_header(&header, &subject)))
}

fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|ch| ch.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|ch| ch.is_uppercase())
}

/// Remove exactly one trailing `.` from the subject
fn strip_full_stop(message: &str, parsed: &ParsedCommit, _: &CommitConfig) -> Option<String> {
    let header = parse_header(&parsed.header)?;
    let subject = header.subject.trim().strip_suffix('.')?.trim_end();
    if subject.is_empty() {
        return None;
    }
    Some(replace_header(message, &format_header(&header, subject)))
}

/// Insert the blank line a leading-blank rule asks for
fn insert_leading_blanks(message: &str, parsed: &ParsedCommit, config: &CommitConfig) -> Option<String> {
    let mut lines: Vec<&str> = split_lines(message).collect();

    // Each violation points at the first line of its section, so the
    // blank goes right before that line.
    let mut positions: Vec<usize> = [
        body_leading_blank::check(parsed, config),
        footer_leading_blank::check(parsed, config),
    ]
    .into_iter()
    .flatten()
    .filter_map(|violation| violation.line)
    .map(|line| line - 1)
    .filter(|&idx| idx >= 1 && idx <= lines.len() && !is_blank(lines[idx - 1]))
    .collect();

    if positions.is_empty() {
        return None;
    }

    positions.sort_unstable();
    positions.dedup();
    for idx in positions.into_iter().rev() {
        lines.insert(idx, "");
    }

    Some(lines.join("\n"))
}

/// Re-wrap body lines longer than `max_line_length`; the footer is left alone
fn wrap_body(message: &str, parsed: &ParsedCommit, config: &CommitConfig) -> Option<String> {
    let start = parsed.body_line?.checked_sub(1)?;
    let count = parsed.body.as_deref()?.split('\n').count();

    let lines: Vec<&str> = split_lines(message).collect();
    let end = (start + count).min(lines.len());
    if start >= end {
        return None;
    }

    let mut out: Vec<String> = lines[..start].iter().map(|line| line.to_string()).collect();
    for line in &lines[start..end] {
        out.extend(wrap_line(line, config.max_line_length));
    }
    out.extend(lines[end..].iter().map(|line| line.to_string()));

    Some(out.join("\n"))
}

fn format_header(header: &Header<'_>, subject: &str) -> String {
    let mut out = header.commit_type.to_string();
    if let Some(scope) = header.scope {
        out.push('(');
        out.push_str(scope);
        out.push(')');
    }
    if header.breaking {
        out.push('!');
    }
    out.push_str(": ");
    out.push_str(subject);
    out
}

fn replace_header(message: &str, header: &str) -> String {
    let mut lines: Vec<&str> = split_lines(message).collect();
    match lines.first_mut() {
        Some(first) => *first = header,
        None => lines.push(header),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(message: &str) -> Option<String> {
        Linter::default().suggest_fix(message)
    }

    fn repair_with(config: CommitConfig, message: &str) -> Option<String> {
        Linter::new(config).suggest_fix(message)
    }

    #[test]
    fn test_subject_case_and_full_stop() {
        assert_eq!(repair("feat: Add login.").as_deref(), Some("feat: add login"));
    }

    #[test]
    fn test_valid_message_is_not_fixed() {
        assert_eq!(repair("feat: perfect message"), None);
    }

    #[test]
    fn test_infers_type_from_verb() {
        assert_eq!(
            repair("Add new feature").as_deref(),
            Some("feat: add new feature")
        );
        assert_eq!(
            repair("fixed crash on startup").as_deref(),
            Some("fix: fixed crash on startup")
        );
        assert_eq!(
            repair("Update dependencies").as_deref(),
            Some("refactor: update dependencies")
        );
        assert_eq!(
            repair("Remove dead code").as_deref(),
            Some("chore: remove dead code")
        );
    }

    #[test]
    fn test_unmapped_verb_becomes_chore() {
        assert_eq!(
            repair("Tweak the build matrix").as_deref(),
            Some("chore: tweak the build matrix")
        );
    }

    #[test]
    fn test_keeps_inline_scope() {
        assert_eq!(
            repair("(auth) add login").as_deref(),
            Some("feat(auth): add login")
        );
        assert_eq!(
            repair("(api)!: remove v1 endpoints").as_deref(),
            Some("chore(api)!: remove v1 endpoints")
        );
    }

    #[test]
    fn test_rebuilds_header_with_broken_separator() {
        assert_eq!(
            repair("feat(scope) add login").as_deref(),
            Some("feat(scope): add login")
        );
        assert_eq!(repair("feat(): x").as_deref(), Some("feat: x"));
        assert_eq!(repair("fix : Handle input").as_deref(), Some("fix: handle input"));
        assert_eq!(repair("feat(api)! drop v1").as_deref(), Some("feat(api)!: drop v1"));
    }

    #[test]
    fn test_broken_header_with_unknown_type() {
        assert_eq!(repair("feta(scope) add login"), None);
        assert_eq!(repair("feta : add login"), None);
    }

    #[test]
    fn test_split_broken_prefix() {
        let header = split_broken_prefix("feat(ui) add").unwrap();
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope, Some("ui"));
        assert_eq!(header.subject, " add");

        assert_eq!(split_broken_prefix("feat(): x").unwrap().scope, None);
        assert!(split_broken_prefix("fix typo").is_none());
        assert!(split_broken_prefix("Add (optional) flag").is_none());
        assert!(split_broken_prefix("(ui) add").is_none());
    }

    #[test]
    fn test_inferred_type_must_be_allowed() {
        let config = CommitConfig {
            types: vec!["fix".to_string()],
            ..CommitConfig::default()
        };
        assert_eq!(repair_with(config, "Add login"), None);
    }

    #[test]
    fn test_normalizes_whitespace() {
        let message = "\n\n  fix: Handle input   \n\n\n\nThe body.  \n\n\n";
        assert_eq!(
            repair(message).as_deref(),
            Some("fix: handle input\n\nThe body.")
        );
    }

    #[test]
    fn test_inserts_body_separator() {
        assert_eq!(
            repair("fix: handle input\nThe parser used to panic.").as_deref(),
            Some("fix: handle input\n\nThe parser used to panic.")
        );
    }

    #[test]
    fn test_inserts_footer_separator() {
        assert_eq!(
            repair("fix: handle input\n\nBody text.\nCloses: #12").as_deref(),
            Some("fix: handle input\n\nBody text.\n\nCloses: #12")
        );
    }

    #[test]
    fn test_inserts_both_separators() {
        assert_eq!(
            repair("fix: x\nBody text.\nCloses: #12").as_deref(),
            Some("fix: x\n\nBody text.\n\nCloses: #12")
        );
    }

    #[test]
    fn test_footer_right_after_header() {
        assert_eq!(
            repair("fix: x\nCloses: #12").as_deref(),
            Some("fix: x\n\nCloses: #12")
        );
    }

    #[test]
    fn test_stops_once_valid() {
        let config = CommitConfig {
            max_line_length: 20,
            ..CommitConfig::default()
        };
        let linter = Linter::new(config.clone());

        // Wrapping would push `Refs: #1` onto a line of its own, where it
        // reads as a footer without a blank line before it.
        let message = "fix: Handle input\n\nthis body line is long and mentions Refs: #1";
        let fixed = repair_with(config.clone(), message);
        assert_eq!(
            fixed.as_deref(),
            Some("fix: handle input\n\nthis body line is long and mentions Refs: #1")
        );
        let result = linter.validate(fixed.as_deref().unwrap());
        assert!(result.valid);
        assert_eq!(result.warnings[0].rule, "body-max-line-length");

        assert_eq!(
            repair_with(config, "fix: Handle input\n\nthis body line is definitely longer than twenty")
                .as_deref(),
            Some("fix: handle input\n\nthis body line is definitely longer than twenty")
        );
    }

    #[test]
    fn test_wrap_body() {
        let config = CommitConfig {
            max_line_length: 20,
            ..CommitConfig::default()
        };
        let message = "fix: x\n\nthis body line is definitely longer than twenty\n\nRefs: #1";
        let parsed = crate::parse(message);
        assert_eq!(
            wrap_body(message, &parsed, &config).as_deref(),
            Some("fix: x\n\nthis body line is\ndefinitely longer\nthan twenty\n\nRefs: #1")
        );
        assert_eq!(wrap_body("fix: x", &crate::parse("fix: x"), &config), None);
    }

    #[test]
    fn test_sentence_case() {
        let config = CommitConfig {
            subject_case: SubjectCase::Sentence,
            ..CommitConfig::default()
        };
        assert_eq!(
            repair_with(config, "Add login.").as_deref(),
            Some("feat: Add login")
        );
    }

    #[test]
    fn test_acronym_is_not_lowercased() {
        assert_eq!(repair("docs: README updates"), None);
    }

    #[test]
    fn test_expanding_case_mapping_is_left_alone() {
        assert_eq!(repair("fix: İstanbul timezone"), None);

        let config = CommitConfig {
            subject_case: SubjectCase::Sentence,
            ..CommitConfig::default()
        };
        assert_eq!(repair_with(config, "fix: ßtring helper"), None);
        assert_eq!(single_char('Ä'.to_lowercase()), Some('ä'));
        assert_eq!(single_char('İ'.to_lowercase()), None);
    }

    #[test]
    fn test_strips_only_one_full_stop() {
        assert_eq!(repair("feat: wait..."), None);
    }

    #[test]
    fn test_unfixable_categories() {
        assert_eq!(repair("feta: add login"), None);
        assert_eq!(repair(&format!("feat: {}", "a".repeat(100))), None);
        assert_eq!(repair("fix:"), None);
        assert_eq!(repair(""), None);

        let scoped = CommitConfig {
            require_scope: true,
            ..CommitConfig::default()
        };
        assert_eq!(repair_with(scoped, "feat: Add login."), None);

        let blocked = CommitConfig {
            blocked_words: vec!["wip".to_string()],
            ..CommitConfig::default()
        };
        assert_eq!(repair_with(blocked, "feat: Wip login."), None);
    }

    #[test]
    fn test_preserves_breaking_marker_and_scope() {
        assert_eq!(
            repair("feat(api)!: Drop v1.").as_deref(),
            Some("feat(api)!: drop v1")
        );
    }

    #[test]
    fn test_fixed_output_is_valid_and_stable() {
        let linter = Linter::default();
        let inputs = [
            "Add new feature",
            "feat: Add login.",
            "fix: x\nBody text.\nCloses: #12",
            "  (ui) Implement dark mode.  \n\n\n\nDetails.\n",
        ];
        for input in inputs {
            let fixed = linter.suggest_fix(input).unwrap();
            assert!(linter.validate(&fixed).valid, "{:?}", fixed);
            assert_eq!(linter.suggest_fix(&fixed), None);
            assert_eq!(linter.fix(&fixed).as_deref(), Some(fixed.as_str()));
            assert_eq!(linter.fix(input), linter.fix(&fixed));
        }
    }

    #[test]
    fn test_split_leading_scope() {
        assert_eq!(split_leading_scope("(ui) add"), (Some("ui"), false, " add"));
        assert_eq!(split_leading_scope("(ui)!: add"), (Some("ui"), true, " add"));
        assert_eq!(split_leading_scope("add (ui)"), (None, false, "add (ui)"));
        assert_eq!(split_leading_scope("() add"), (None, false, "() add"));
    }

    #[test]
    fn test_is_acronym() {
        assert!(is_acronym("API"));
        assert!(is_acronym("HTTP/2"));
        assert!(!is_acronym("A"));
        assert!(!is_acronym("Add"));
        assert!(!is_acronym("123"));
    }
}
