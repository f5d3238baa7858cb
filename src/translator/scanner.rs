//! Word scanner for declarator text
//!
//! Classifies characters per C identifier rules, extracts maximal identifier
//! runs in either direction, and answers keyword-membership queries against
//! the fixed set of type and qualifier tokens.

use rustc_hash::FxHashSet;

/// Scan direction for [`scan_word`] and the buffer's whitespace skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The type and qualifier tokens the translator recognizes.
///
/// Only these matter for deciding whether an identifier-shaped token is the
/// declared name; any other word is treated as the name (or, after the name
/// is consumed, left in the base-type text).
pub const KEYWORDS: [&str; 10] = [
    "int", "char", "double", "float", "void", "long", "short", "unsigned", "const", "volatile",
];

/// Returns true if `c` may start a C identifier (letter or underscore).
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` may appear inside a C identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Consume the maximal run of identifier characters from `cursor` in the
/// given direction; returns the word and the new cursor.
///
/// The cursor is a boundary index. Scanning right collects `chars[cursor..]`
/// while identifier characters continue and returns the boundary after the
/// word; scanning left walks back from `cursor` to the word's start and
/// returns that start, so a word can be captured from its interior.
pub fn scan_word(chars: &[char], cursor: usize, direction: Direction) -> (String, usize) {
    match direction {
        Direction::Right => {
            let mut end = cursor;
            while end < chars.len() && is_identifier_char(chars[end]) {
                end += 1;
            }
            (chars[cursor..end].iter().collect(), end)
        }
        Direction::Left => {
            let mut start = cursor;
            while start > 0 && is_identifier_char(chars[start - 1]) {
                start -= 1;
            }
            (chars[start..cursor].iter().collect(), start)
        }
    }
}

/// Exact, case-sensitive membership test for the fixed keyword set.
///
/// Built fresh per translation and never mutated.
pub struct Keywords {
    set: FxHashSet<&'static str>,
}

impl Keywords {
    pub fn new() -> Self {
        Keywords {
            set: KEYWORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(is_identifier_start('_'));
        assert!(!is_identifier_start('1'));
        assert!(!is_identifier_start('*'));

        assert!(is_identifier_char('1'));
        assert!(is_identifier_char('_'));
        assert!(!is_identifier_char(' '));
        assert!(!is_identifier_char('['));
    }

    #[test]
    fn test_scan_word_right() {
        let chars: Vec<char> = "next)(".chars().collect();
        let (word, cursor) = scan_word(&chars, 0, Direction::Right);
        assert_eq!(word, "next");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_scan_word_right_stops_immediately_on_non_word() {
        let chars: Vec<char> = "*x".chars().collect();
        let (word, cursor) = scan_word(&chars, 0, Direction::Right);
        assert_eq!(word, "");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_scan_word_left_finds_start() {
        let chars: Vec<char> = "char* const".chars().collect();
        // Boundary after "const"
        let (word, cursor) = scan_word(&chars, chars.len(), Direction::Left);
        assert_eq!(word, "const");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_keywords_exact_and_case_sensitive() {
        let keys = Keywords::new();
        assert!(keys.contains("int"));
        assert!(keys.contains("volatile"));
        assert!(!keys.contains("Int"));
        assert!(!keys.contains("in"));
        assert!(!keys.contains("integer"));
        assert!(!keys.contains("next"));
    }
}
