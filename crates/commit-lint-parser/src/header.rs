//! Scanner for the header grammar `type(scope)!: subject`.

/// Components of a header that matched the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub commit_type: &'a str,
    pub scope: Option<&'a str>,
    pub breaking: bool,
    /// Everything after `:` and at most one whitespace character.
    pub subject: &'a str,
}

/// Character cursor over a single header line.
struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        &self.source[start..self.pos]
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

/// Characters allowed in a commit type.
pub fn is_type_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

/// Match a header line against the conventional grammar.
///
/// Returns `None` when the line does not have the `type(scope)!: subject`
/// shape; the caller keeps the header text either way.
pub fn parse_header(line: &str) -> Option<Header<'_>> {
    let mut scanner = Scanner::new(line);

    let commit_type = scanner.take_while(is_type_char);
    if commit_type.is_empty() {
        return None;
    }

    let scope = if scanner.eat('(') {
        let scope = scanner.take_while(|ch| ch != '(' && ch != ')');
        if scope.is_empty() || !scanner.eat(')') {
            return None;
        }
        Some(scope)
    } else {
        None
    };

    let breaking = scanner.eat('!');

    if !scanner.eat(':') {
        return None;
    }

    if scanner.peek().is_some_and(char::is_whitespace) {
        scanner.bump();
    }

    Some(Header {
        commit_type,
        scope,
        breaking,
        subject: scanner.rest(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_and_subject() {
        let header = parse_header("feat: add login").unwrap();
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope, None);
        assert!(!header.breaking);
        assert_eq!(header.subject, "add login");
    }

    #[test]
    fn test_scope_and_breaking_marker() {
        let header = parse_header("refactor(api)!: rename endpoints").unwrap();
        assert_eq!(header.commit_type, "refactor");
        assert_eq!(header.scope, Some("api"));
        assert!(header.breaking);
        assert_eq!(header.subject, "rename endpoints");
    }

    #[test]
    fn test_no_space_after_colon() {
        let header = parse_header("fix:typo").unwrap();
        assert_eq!(header.subject, "typo");
    }

    #[test]
    fn test_only_one_space_is_consumed() {
        let header = parse_header("fix:  typo").unwrap();
        assert_eq!(header.subject, " typo");
    }

    #[test]
    fn test_empty_subject() {
        let header = parse_header("fix:").unwrap();
        assert_eq!(header.subject, "");
    }

    #[test]
    fn test_scope_with_separators() {
        let header = parse_header("chore(deps/dev-tools): bump").unwrap();
        assert_eq!(header.scope, Some("deps/dev-tools"));
    }

    #[test]
    fn test_rejects_non_conventional_headers() {
        assert!(parse_header("Add new feature").is_none());
        assert!(parse_header(" feat: leading space").is_none());
        assert!(parse_header("feat(): empty scope").is_none());
        assert!(parse_header("feat(api: unclosed").is_none());
        assert!(parse_header("feat (api): space before scope").is_none());
        assert!(parse_header(": no type").is_none());
        assert!(parse_header("").is_none());
    }
}
