use unicode_width::UnicodeWidthChar;

pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0).max(1)
}

pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in line.chars() {
        let ch_width = char_width(ch);
        if current_width + ch_width > width && !current.is_empty() {
            lines.push(current);
            current = String::new();
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    lines.push(current);
    lines
}

/// Breaks on spaces where possible, falling back to hard wrapping for long words.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(char_width).sum();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        let mut pieces = wrap_line(word, width);
        if let Some(last) = pieces.pop() {
            lines.extend(pieces);
            current_width = last.chars().map(char_width).sum();
            current = last;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{wrap_line, wrap_words};

    #[test]
    fn wrap_line_splits_by_width() {
        assert_eq!(wrap_line("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_line("", 4), vec![""]);
        assert!(wrap_line("abc", 0).is_empty());
    }

    #[test]
    fn wrap_words_prefers_spaces() {
        assert_eq!(
            wrap_words("Session with custom cookies", 12),
            vec!["Session with", "custom", "cookies"]
        );
    }

    #[test]
    fn wrap_words_hard_wraps_long_words() {
        assert_eq!(wrap_words("a abcdefgh", 4), vec!["a", "abcd", "efgh"]);
        assert_eq!(wrap_words("", 4), vec![""]);
    }
}
