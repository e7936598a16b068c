//! Forward-only input cursor with a single-step rewind.
//!
//! The cursor walks the input one `char` at a time. Literal mask positions
//! read one character ahead and, when it is not the separator they expect,
//! hand it back with [`Cursor::prev`] so the next mask position can consume it:
//!
//! ```text
//! mask  : 9 9 / 9 9
//! input : 2 5 1 2
//!             ^ '/' reads '1', rewinds, emits a synthesized '/'
//! ```
//!
//! ## Invariants
//!
//! - `0 <= position <= len`.
//! - `position` only decreases through `prev`, by exactly one, and only right
//!   after a successful `next`.

/// Cursor over the characters of one input string.
///
/// A cursor belongs to a single format run and is left wherever that run
/// stopped; build a new one per input.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    position: usize,
    last: Option<char>,
    rewinds: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self { source: input.chars().collect(), position: 0, last: None, rewinds: 0 }
    }

    /// True while characters remain at or after the current position.
    pub fn has_next(&self) -> bool {
        self.position < self.source.len()
    }

    /// The character most recently returned by `next`, without moving.
    ///
    /// `None` before the first advance and right after a rewind.
    pub fn current(&self) -> Option<char> {
        self.last
    }

    /// Undo the last `next`, returning `true`.
    ///
    /// Precondition: the previous cursor call was a `next` that returned a
    /// character. Otherwise nothing moves and this returns `false`; two
    /// rewinds in a row are never honored.
    pub fn prev(&mut self) -> bool {
        if self.last.take().is_none() {
            return false;
        }
        self.position -= 1;
        self.rewinds += 1;
        true
    }

    /// Index of the next character to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of characters in the input.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Characters not yet read.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position
    }

    /// Number of rewinds performed so far.
    pub fn rewinds(&self) -> usize {
        self.rewinds
    }
}

impl Iterator for Cursor {
    type Item = char;

    /// Advance past the next character and return it.
    ///
    /// At the end of the input this returns `None` and leaves both the position
    /// and the last-read character untouched.
    fn next(&mut self) -> Option<char> {
        let c = *self.source.get(self.position)?;
        self.position += 1;
        self.last = Some(c);
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_and_records_current() {
        let mut cursor = Cursor::new("ab");
        assert!(cursor.has_next());
        assert_eq!(cursor.current(), None);

        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.position(), 1);

        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.current(), Some('b'));
        assert!(!cursor.has_next());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn next_at_end_does_not_move() {
        let mut cursor = Cursor::new("x");
        cursor.next();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn prev_undoes_exactly_one_advance() {
        let mut cursor = Cursor::new("12");
        cursor.next();
        cursor.next();
        assert!(cursor.prev());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.rewinds(), 1);

        // The rewound character is read again.
        assert_eq!(cursor.next(), Some('2'));
    }

    #[test]
    fn prev_without_advance_is_refused() {
        let mut cursor = Cursor::new("12");
        assert!(!cursor.prev());
        assert_eq!(cursor.position(), 0);

        cursor.next();
        assert!(cursor.prev());
        assert!(!cursor.prev());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.rewinds(), 1);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut cursor = Cursor::new("é1");
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.next(), Some('é'));
        assert_eq!(cursor.remaining(), 1);
        assert!(!Cursor::new("").has_next());
        assert!(Cursor::new("").is_empty());
    }
}
