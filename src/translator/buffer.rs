//! Declaration buffer with tombstone erasure and compaction
//!
//! The state machine consumes a declarator by erasing the construct it just
//! interpreted and compacting the buffer before the next scan. Erasure marks
//! a contiguous range as tombstoned; compaction removes the tombstones in one
//! linear pass, preserving the relative order of surviving characters and
//! re-basing the cursor so it still denotes the same logical boundary.
//!
//! The cursor is a boundary index in `0..=len`: it sits between characters
//! rather than on one, so "the character to the right" is `chars[cursor]` and
//! "the character to the left" is `chars[cursor - 1]`.

use super::scanner::Direction;
use std::ops::Range;

/// The mutable declarator being parsed.
#[derive(Debug, Clone)]
pub struct DeclBuffer {
    chars: Vec<char>,
    erased: Vec<bool>,
    cursor: usize,
}

impl DeclBuffer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let erased = vec![false; chars.len()];
        DeclBuffer {
            chars,
            erased,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `position`, clamped to the buffer boundary.
    pub fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.chars.len());
    }

    /// The character immediately right of the cursor, if any.
    pub fn peek_right(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    /// The character immediately left of the cursor, if any.
    pub fn peek_left(&self) -> Option<char> {
        if self.cursor == 0 {
            None
        } else {
            Some(self.chars[self.cursor - 1])
        }
    }

    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Raw character view for the word scanner. Only meaningful on a
    /// compacted buffer.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Tombstone a contiguous range. O(range length).
    pub fn erase(&mut self, range: Range<usize>) {
        for i in range {
            self.erased[i] = true;
        }
    }

    /// Tombstone a single position.
    pub fn erase_at(&mut self, position: usize) {
        self.erased[position] = true;
    }

    /// Remove all tombstoned positions in one linear pass, shifting the
    /// survivors left and decrementing the cursor by the count of tombstones
    /// strictly before it, so it keeps denoting the same logical boundary.
    pub fn compact(&mut self) {
        let mut removed_before_cursor = 0;
        let mut write = 0;
        for read in 0..self.chars.len() {
            if self.erased[read] {
                if read < self.cursor {
                    removed_before_cursor += 1;
                }
            } else {
                self.chars[write] = self.chars[read];
                write += 1;
            }
        }
        self.chars.truncate(write);
        self.erased.clear();
        self.erased.resize(write, false);
        self.cursor -= removed_before_cursor;
    }

    /// Advance the cursor past space characters only, stopping at the first
    /// non-space or at the buffer boundary. Never runs off either end.
    pub fn skip_whitespace(&mut self, direction: Direction) {
        match direction {
            Direction::Right => {
                while self.cursor < self.chars.len() && self.chars[self.cursor] == ' ' {
                    self.cursor += 1;
                }
            }
            Direction::Left => {
                while self.cursor > 0 && self.chars[self.cursor - 1] == ' ' {
                    self.cursor -= 1;
                }
            }
        }
    }

    /// The non-erased buffer contents.
    pub fn remaining(&self) -> String {
        self.chars
            .iter()
            .zip(&self.erased)
            .filter(|(_, &dead)| !dead)
            .map(|(&c, _)| c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_compact_preserves_order() {
        let mut buf = DeclBuffer::new("int *[]");
        buf.erase(4..5); // '*'
        buf.compact();
        assert_eq!(buf.remaining(), "int []");
    }

    #[test]
    fn test_compact_rebases_cursor_after_erased_range() {
        let mut buf = DeclBuffer::new("int *x[]");
        // Erase "x" (position 5) with the cursor boundary after it.
        buf.set_cursor(6);
        buf.erase(5..6);
        buf.compact();
        // Cursor now sits between '*' and '['.
        assert_eq!(buf.remaining(), "int *[]");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.peek_right(), Some('['));
        assert_eq!(buf.peek_left(), Some('*'));
    }

    #[test]
    fn test_compact_leaves_cursor_before_erased_range() {
        let mut buf = DeclBuffer::new("x[3]");
        buf.set_cursor(1);
        buf.erase(1..4);
        buf.compact();
        assert_eq!(buf.remaining(), "x");
        assert_eq!(buf.cursor(), 1);
        assert_eq!(buf.peek_right(), None);
    }

    #[test]
    fn test_skip_whitespace_stops_at_boundaries() {
        let mut buf = DeclBuffer::new("   ");
        buf.skip_whitespace(Direction::Right);
        assert_eq!(buf.cursor(), 3);
        buf.skip_whitespace(Direction::Left);
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_skip_whitespace_stops_at_non_space() {
        let mut buf = DeclBuffer::new("int  x");
        buf.set_cursor(5);
        buf.skip_whitespace(Direction::Left);
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.peek_left(), Some('t'));
    }

    #[test]
    fn test_erase_then_compact_twice_is_stable() {
        let mut buf = DeclBuffer::new("char* const");
        buf.set_cursor(11);
        buf.erase(6..11); // "const"
        buf.compact();
        assert_eq!(buf.remaining(), "char* ");
        assert_eq!(buf.cursor(), 6);
        buf.compact();
        assert_eq!(buf.remaining(), "char* ");
        assert_eq!(buf.cursor(), 6);
    }
}
