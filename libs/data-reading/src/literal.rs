//! # Numeric Literals
//!
//! Finds floating-point literals in free text.
//!
//! ## Grammar
//!
//! ```text
//! literal  = sign? digit+ fraction? exponent?
//! sign     = '+' | '-'
//! fraction = '.' digit*
//! exponent = ('e' | 'E') sign? digit+
//! ```
//!
//! Matches are leftmost and non-overlapping; text between them is skipped
//! without complaint. An exponent marker not followed by digits is not part
//! of the literal (`2e` yields `2`), and a leading dot is not either (`.5`
//! yields `5`).

use std::ops::Range;

use crate::cursor::Cursor;

// =============================================================================
// LITERAL
// =============================================================================

/// A literal found in a line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal<'a> {
    /// Matched text.
    pub text: &'a str,
    /// Byte range of `text` in the scanned line.
    pub span: Range<usize>,
}

impl Literal<'_> {
    /// Numeric value of the literal.
    ///
    /// Exponents beyond the `f64` range give an infinity or zero, as
    /// [`str::parse`] does.
    #[must_use]
    pub fn value(&self) -> f64 {
        // every matched text is in the `f64` grammar, the NaN is unreachable
        self.text.parse().unwrap_or(f64::NAN)
    }
}

// =============================================================================
// SCANNER
// =============================================================================

/// Iterator over the literals of a line.
///
/// ## Example
///
/// ```rust
/// use data_reading::literals;
///
/// let found: Vec<&str> = literals("x=-1.5e3, y=.25").map(|l| l.text).collect();
/// assert_eq!(found, vec!["-1.5e3", "25"]);
/// ```
#[derive(Debug, Clone)]
pub struct Literals<'a> {
    cursor: Cursor<'a>,
}

/// Scan `text` for literals.
pub fn literals(text: &str) -> Literals<'_> {
    Literals {
        cursor: Cursor::new(text),
    }
}

impl<'a> Literals<'a> {
    /// Try to match a literal at the cursor; leaves the cursor untouched on
    /// failure.
    fn scan_literal(&mut self) -> Option<Literal<'a>> {
        let start = self.cursor.offset();
        let mut ahead = self.cursor.clone();

        if matches!(ahead.peek(), Some('+' | '-')) {
            ahead.advance();
        }
        if ahead.advance_while(|c| c.is_ascii_digit()) == 0 {
            return None;
        }

        if ahead.peek() == Some('.') {
            ahead.advance();
            ahead.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(ahead.peek(), Some('e' | 'E')) {
            let digits_at = if matches!(ahead.peek_nth(1), Some('+' | '-')) { 2 } else { 1 };
            if ahead.peek_nth(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    ahead.advance();
                }
                ahead.advance_while(|c| c.is_ascii_digit());
            }
        }

        self.cursor = ahead;
        Some(Literal {
            text: self.cursor.slice_from(start),
            span: start..self.cursor.offset(),
        })
    }
}

impl<'a> Iterator for Literals<'a> {
    type Item = Literal<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.cursor.is_eof() {
            if let Some(literal) = self.scan_literal() {
                return Some(literal);
            }
            self.cursor.advance();
        }
        None
    }
}

/// Every numeric value in `text`, in order of appearance.
///
/// ## Example
///
/// ```rust
/// use data_reading::doubles_from_str;
///
/// assert_eq!(doubles_from_str("1 -2.5 +3e2 four 5."), vec![1.0, -2.5, 300.0, 5.0]);
/// assert!(doubles_from_str("no numbers here").is_empty());
/// ```
pub fn doubles_from_str(text: &str) -> Vec<f64> {
    literals(text).map(|literal| literal.value()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
