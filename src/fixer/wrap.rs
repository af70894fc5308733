//! Greedy re-wrapping of long body lines.

/// Wrap a single line at whitespace so each piece fits in `width` characters
///
/// Words are never split; a word longer than `width` gets a line of its own.
/// Continuation lines keep the original line's indentation. Lines that
/// already fit are returned as they are.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let indent_len = line.len() - line.trim_start().len();
    let indent = &line[..indent_len];
    let indent_width = indent.chars().count();

    let mut lines = Vec::new();
    let mut current = indent.to_string();
    let mut current_width = indent_width;

    for word in line.split_whitespace() {
        let word_width = word.chars().count();

        if current_width > indent_width && current_width + 1 + word_width > width {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            current_width = indent_width;
        }

        if current_width > indent_width {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if current_width > indent_width || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }

    lines
}

/// Wrap every line of `text`, keeping blank lines between paragraphs
pub fn wrap_text(text: &str, width: usize) -> String {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(wrap_line("short line", 20), vec!["short line"]);
    }

    #[test]
    fn test_wraps_at_whitespace() {
        assert_eq!(
            wrap_line("the quick brown fox jumps over the lazy dog", 15),
            vec!["the quick brown", "fox jumps over", "the lazy dog"]
        );
    }

    #[test]
    fn test_never_splits_words() {
        assert_eq!(
            wrap_line("see https://example.com/a/very/long/path for details", 10),
            vec!["see", "https://example.com/a/very/long/path", "for", "details"]
        );
    }

    #[test]
    fn test_keeps_indentation() {
        assert_eq!(
            wrap_line("  - first item that is long", 14),
            vec!["  - first item", "  that is long"]
        );
    }

    #[test]
    fn test_every_piece_fits() {
        let line = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
        for piece in wrap_line(line, 20) {
            assert!(piece.chars().count() <= 20, "{:?}", piece);
        }
    }

    #[test]
    fn test_wrap_text_preserves_paragraphs() {
        let text = "aaa bbb ccc\n\nddd eee fff";
        assert_eq!(wrap_text(text, 7), "aaa bbb\nccc\n\nddd eee\nfff");
    }

    #[test]
    fn test_wrapping_is_stable() {
        let once = wrap_text("one two three four five six seven", 10);
        assert_eq!(wrap_text(&once, 10), once);
    }
}
