use crate::docs::RuleDoc;
use crate::linter::{Severity, Violation};
use crate::{CommitConfig, ParsedCommit};

/// Rule documentation
pub static DOC: RuleDoc = RuleDoc {
    name: "blocked-words",
    category: "content",
    description: "Rejects messages containing any of the configured `blockedWords`",
    severity: Severity::Error,
    why: r#"Teams use this to keep placeholders such as `wip` or `fixup` and
internal code names out of the permanent history. Matching is
case-insensitive and only on whole words, so `wip` does not match
`wipe`."#,
    bad_example: "feat: WIP login form",
    good_example: "feat: add login form",
    fixable: false,
};

pub fn check(commit: &ParsedCommit, config: &CommitConfig) -> Option<Violation> {
    if config.blocked_words.is_empty() {
        return None;
    }

    let mut found: Vec<&str> = Vec::new();
    let mut first_line = None;

    for (line_number, line) in searchable_lines(commit) {
        let line = line.to_lowercase();
        for word in &config.blocked_words {
            if contains_word(&line, &word.to_lowercase()) {
                first_line.get_or_insert(line_number);
                if !found.contains(&word.as_str()) {
                    found.push(word);
                }
            }
        }
    }

    // Report in config order so the message is stable.
    found.sort_by_key(|word| config.blocked_words.iter().position(|w| w == word));

    let message = format!("message contains blocked words: {}", found.join(", "));
    Some(Violation::new(message).at_line(first_line?))
}

/// Header, body and footer lines with their 1-based line numbers
fn searchable_lines(commit: &ParsedCommit) -> impl Iterator<Item = (usize, &str)> {
    let header = std::iter::once((1, commit.header.as_str()));
    let body = commit
        .body_line
        .into_iter()
        .flat_map(move |start| commit.body_lines().enumerate().map(move |(i, l)| (start + i, l)));
    let footer = commit.footer_line.into_iter().flat_map(move |start| {
        commit
            .footer
            .as_deref()
            .unwrap_or("")
            .lines()
            .enumerate()
            .map(move |(i, l)| (start + i, l))
    });
    header.chain(body).chain(footer)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `needle` occurs in `haystack` bounded by non-word characters
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|ch| !is_word_char(ch));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|ch| !is_word_char(ch));
        before_ok && after_ok
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn blocking(words: &[&str]) -> CommitConfig {
        CommitConfig {
            blocked_words: words.iter().map(|w| w.to_string()).collect(),
            ..CommitConfig::default()
        }
    }

    #[test]
    fn test_no_blocked_words_configured() {
        assert!(check(&parse("feat: wip"), &CommitConfig::default()).is_none());
    }

    #[test]
    fn test_match_in_header_is_case_insensitive() {
        let violation = check(&parse("feat: WIP login"), &blocking(&["wip"])).unwrap();
        assert_eq!(violation.message, "message contains blocked words: wip");
        assert_eq!(violation.line, Some(1));
    }

    #[test]
    fn test_whole_words_only() {
        let config = blocking(&["wip"]);
        assert!(check(&parse("feat: wipe cache"), &config).is_none());
        assert!(check(&parse("feat: swipe gesture"), &config).is_none());
        assert!(check(&parse("feat: (wip) login"), &config).is_some());
    }

    #[test]
    fn test_match_in_body_and_footer() {
        let config = blocking(&["hack", "todo"]);
        let violation =
            check(&parse("fix: x\n\nan ugly hack\n\nRefs: TODO-12"), &config).unwrap();
        assert_eq!(violation.message, "message contains blocked words: hack, todo");
        assert_eq!(violation.line, Some(3));
    }

    #[test]
    fn test_phrase() {
        let config = blocking(&["do not merge"]);
        assert!(check(&parse("feat: login (Do Not Merge)"), &config).is_some());
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("a wip b", "wip"));
        assert!(contains_word("wip", "wip"));
        assert!(contains_word("wip-1", "wip"));
        assert!(!contains_word("wip_1", "wip"));
        assert!(!contains_word("anything", ""));
        assert!(contains_word("wipwip wip", "wip"));
    }
}
