#![forbid(unsafe_code)]

//! Bidirectional character cursor.
//!
//! Label drawing consumes text from both ends: the head left-to-right and
//! the tail right-to-left. [`CharCursor`] walks a `&str` by Unicode scalar
//! value from either end, decoding each character exactly once, and keeps an
//! exact count of what is left so callers never re-scan the text to measure
//! it.

use core::iter::FusedIterator;
use core::str::Chars;

/// A double-ended cursor over the characters of a string slice.
///
/// ```
/// use cellgrid_render::cursor::CharCursor;
///
/// let mut cur = CharCursor::new("añb");
/// assert_eq!(cur.remaining(), 3);
/// assert_eq!(cur.next_back(), Some('b'));
/// assert_eq!(cur.next(), Some('a'));
/// assert_eq!(cur.as_str(), "ñ");
/// ```
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    chars: Chars<'a>,
    remaining: usize,
}

impl<'a> CharCursor<'a> {
    /// Create a cursor spanning all of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            remaining: text.chars().count(),
        }
    }

    /// Characters not yet consumed from either end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The unconsumed portion of the text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }

    /// Drop up to `n` characters from the front.
    pub fn skip_front(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }
}

impl Iterator for CharCursor<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.remaining -= 1;
        Some(ch)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for CharCursor<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        let ch = self.chars.next_back()?;
        self.remaining -= 1;
        Some(ch)
    }
}

impl ExactSizeIterator for CharCursor<'_> {}

impl FusedIterator for CharCursor<'_> {}
