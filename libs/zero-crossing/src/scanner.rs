//! # Adjacent-Pair Scanner
//!
//! Single forward pass over a sequence, testing each adjacent pair with a
//! binary predicate.
//!
//! ## Copy Semantics
//!
//! Every element is cloned into a local "previous" slot before it is compared
//! against the next one, so the predicate never needs two live borrows into
//! the producer. Lazy or transient producers are fine.
//!
//! ## Resumption
//!
//! After a pair `(a, b)` is accepted, `b` stays in the "previous" slot. The
//! next search starts *at* `b`, so the arrival of one pair can be the
//! departure of the following one.

use crate::sink::CrossingSink;

// =============================================================================
// ADJACENT PAIRS
// =============================================================================

/// Resumable scanner over adjacent pairs of an iterator.
///
/// Positions are zero-based indices into the scanned sequence; a search that
/// runs off the end returns `None`, the end-of-sequence position.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::AdjacentPairs;
///
/// let mut pairs = AdjacentPairs::new([1, 2, 5, 6, 9].into_iter());
/// assert_eq!(pairs.find_pair(|a, b| b - a > 2), Some((2, 5)));
/// assert_eq!(pairs.find_pair(|a, b| b - a > 2), Some((4, 9)));
/// assert_eq!(pairs.find_pair(|a, b| b - a > 2), None);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacentPairs<I: Iterator> {
    /// Source of elements.
    iter: I,
    /// Departure value for the next pair.
    previous: Option<I::Item>,
    /// Number of elements read so far.
    consumed: usize,
}

impl<I> AdjacentPairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a scanner positioned before the first element.
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            previous: None,
            consumed: 0,
        }
    }

    /// Number of elements read from the underlying iterator.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn next_element(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        self.consumed += 1;
        Some(item)
    }

    /// Find the next pair satisfying `predicate`.
    ///
    /// ## Returns
    ///
    /// Index and value of the pair's second element, or `None` when fewer
    /// than two elements remain or no pair matches.
    pub fn find_pair<F>(&mut self, mut predicate: F) -> Option<(usize, I::Item)>
    where
        F: FnMut(&I::Item, &I::Item) -> bool,
    {
        let mut previous = match self.previous.take() {
            Some(previous) => previous,
            None => self.next_element()?,
        };

        while let Some(current) = self.next_element() {
            if predicate(&previous, &current) {
                self.previous = Some(current.clone());
                return Some((self.consumed - 1, current));
            }
            previous = current;
        }

        None
    }

    /// Like [`find_pair`](Self::find_pair), but every element read during the
    /// call is also copied into `sink`, the matching one included.
    ///
    /// When nothing matches the whole remaining sequence ends up in `sink`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use zero_crossing::AdjacentPairs;
    ///
    /// let mut prefix = Vec::new();
    /// let mut pairs = AdjacentPairs::new([3, 4, 10, 11].into_iter());
    /// assert_eq!(pairs.copy_until(|a, b| b - a > 2, &mut prefix), Some(2));
    /// assert_eq!(prefix, vec![3, 4, 10]);
    /// ```
    pub fn copy_until<F, K>(&mut self, mut predicate: F, sink: &mut K) -> Option<usize>
    where
        F: FnMut(&I::Item, &I::Item) -> bool,
        K: CrossingSink<I::Item> + ?Sized,
    {
        let mut previous = match self.previous.take() {
            Some(previous) => previous,
            None => {
                let first = self.next_element()?;
                sink.accept(first.clone());
                first
            }
        };

        while let Some(current) = self.next_element() {
            sink.accept(current.clone());
            if predicate(&previous, &current) {
                self.previous = Some(current);
                return Some(self.consumed - 1);
            }
            previous = current;
        }

        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
