// src/domain/password/charset.rs
//! Character-class counting used by the strength checks.
//!
//! Every class here is ASCII-only. Non-ASCII characters count as symbols.

/// Characters stripped from both ends before the whitespace comparison.
const TRIMMED: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Strip leading and trailing whitespace. Interior whitespace is left alone.
pub fn trim_edges(value: &str) -> &str {
    value.trim_matches(TRIMMED)
}

pub fn has_edge_whitespace(value: &str) -> bool {
    trim_edges(value).len() != value.len()
}

/// `[0-9]`
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// Anything outside `[A-Za-z0-9_]`.
pub fn count_symbols(value: &str) -> usize {
    value.chars().filter(|c| !is_word_char(*c)).count()
}

/// `[A-Z]`
pub fn count_uppercase(value: &str) -> usize {
    value.chars().filter(char::is_ascii_uppercase).count()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_only_touches_the_edges() {
        assert_eq!(trim_edges("  ab cd\t\n"), "ab cd");
        assert_eq!(trim_edges("\0pw\x0B"), "pw");
        assert!(has_edge_whitespace(" abcd"));
        assert!(has_edge_whitespace("abcd "));
        assert!(!has_edge_whitespace("ab  cd"));
        assert!(!has_edge_whitespace(""));
    }

    #[test]
    fn digits_are_ascii_only() {
        assert_eq!(count_digits("a1b22"), 3);
        assert_eq!(count_digits("١٢٣"), 0);
    }

    #[test]
    fn underscore_is_not_a_symbol() {
        assert_eq!(count_symbols("pass_word"), 0);
        assert_eq!(count_symbols("p@ss w0rd!"), 3);
        assert_eq!(count_symbols("héllo"), 1);
    }

    #[test]
    fn multibyte_character_is_one_symbol() {
        assert_eq!("é".len(), 2);
        assert_eq!(count_symbols("abcé"), 1);
    }

    #[test]
    fn uppercase_ignores_non_ascii_capitals() {
        assert_eq!(count_uppercase("PassWord"), 2);
        assert_eq!(count_uppercase("ÉCOLE"), 4);
        assert_eq!(count_uppercase("lower"), 0);
    }
}
