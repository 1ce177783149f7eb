//! # Character Cursor
//!
//! Peekable character cursor over a single line of text.
//! Tracks the byte offset as it advances.
//!
//! ## Example
//!
//! ```rust
//! use data_reading::Cursor;
//!
//! let mut cursor = Cursor::new("-1.5e3");
//! assert_eq!(cursor.peek(), Some('-'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('1'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with byte-offset tracking.
///
/// ## Example
///
/// ```rust
/// use data_reading::Cursor;
///
/// let mut cursor = Cursor::new("12 ab");
/// cursor.advance_while(|c| c.is_ascii_digit());
/// assert_eq!(cursor.offset(), 2);
/// assert_eq!(cursor.slice_from(0), "12");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Character `n` positions ahead of the current one.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use data_reading::Cursor;
    ///
    /// let cursor = Cursor::new("e+7");
    /// assert_eq!(cursor.peek_nth(2), Some('7'));
    /// assert_eq!(cursor.peek_nth(3), None);
    /// ```
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.byte..].chars().nth(n)
    }

    /// Consume the current character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Returns
    ///
    /// Number of characters consumed
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut consumed = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
            consumed += 1;
        }
        consumed
    }

    /// Text from byte offset `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
