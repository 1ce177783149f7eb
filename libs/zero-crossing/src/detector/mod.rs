//! # Crossing Detector
//!
//! Composes the sign classifier, the gap filter and an optional projection
//! into the single predicate fed to the [`AdjacentPairs`] scanner.
//!
//! ## Defaults
//!
//! | Setting     | Default    |
//! |-------------|------------|
//! | direction   | `Any`      |
//! | max gap     | none       |
//! | projection  | identity   |
//!
//! ## Output Disciplines
//!
//! - [`find_first`](CrossingDetector::find_first): first crossing or `None`
//! - [`crossings`](CrossingDetector::crossings) / [`collect_all`](CrossingDetector::collect_all):
//!   every crossing, in order
//! - [`copy_until`](CrossingDetector::copy_until): prefix up to and including
//!   the first crossing
//!
//! Projected values decide sign and gap; the emitted values are always the
//! original elements.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::direction::Direction;
use crate::gap::{within_gap, Scalar};
use crate::scanner::AdjacentPairs;
use crate::sink::CrossingSink;

// =============================================================================
// CROSSING
// =============================================================================

/// A crossing found in a sequence.
///
/// `index` is the position of the pair's second element, counted from the
/// start of the scanned sequence; `value` is that element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossing<T> {
    /// Position of the arrival element.
    pub index: usize,
    /// The arrival element, untransformed.
    pub value: T,
}

// =============================================================================
// DETECTOR
// =============================================================================

/// Detector working directly on scalar values (identity projection).
pub type ScalarDetector<S> = CrossingDetector<fn(&S) -> S, S>;

fn identity<S: Copy>(value: &S) -> S {
    *value
}

/// Zero-crossing detector settings.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::{Direction, ScalarDetector};
///
/// let detector = ScalarDetector::new()
///     .with_direction(Direction::Rising)
///     .with_max_gap(5.0);
///
/// let found = detector.collect_all([-2.0, -1.0, 1.0, -3.0, -2.0, 1.0, -30.0, 2.0]);
/// assert_eq!(found, vec![1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrossingDetector<P, S> {
    direction: Direction,
    max_gap: Option<S>,
    projection: P,
}

impl<S: Scalar> ScalarDetector<S> {
    /// Detector for any direction, without gap limit, on the raw values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            direction: Direction::Any,
            max_gap: None,
            projection: identity::<S>,
        }
    }
}

impl<S: Scalar> Default for ScalarDetector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S: Scalar> CrossingDetector<P, S> {
    /// Restrict crossings to `direction`.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Accept only crossings with `|d1 - d2| < threshold`.
    #[must_use]
    pub fn with_max_gap(mut self, threshold: S) -> Self {
        self.max_gap = Some(threshold);
        self
    }

    /// Remove any gap limit.
    #[must_use]
    pub fn without_max_gap(mut self) -> Self {
        self.max_gap = None;
        self
    }

    /// Decide sign and gap on `projection(element)` instead of the element.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use zero_crossing::ScalarDetector;
    ///
    /// let samples = [(0.0, -1.0), (0.1, 2.0), (0.2, 3.0)];
    /// let detector = ScalarDetector::new().with_projection(|s: &(f64, f64)| s.1);
    /// assert_eq!(detector.collect_all(samples), vec![(0.1, 2.0)]);
    /// ```
    #[must_use]
    pub fn with_projection<T, Q>(self, projection: Q) -> CrossingDetector<Q, S>
    where
        Q: Fn(&T) -> S,
    {
        CrossingDetector {
            direction: self.direction,
            max_gap: self.max_gap,
            projection,
        }
    }

    /// Configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Configured gap limit, if any.
    pub fn max_gap(&self) -> Option<S> {
        self.max_gap
    }

    /// The one predicate every discipline scans with.
    fn accepts<T>(&self, a: &T, b: &T) -> bool
    where
        P: Fn(&T) -> S,
    {
        let d1 = (self.projection)(a);
        let d2 = (self.projection)(b);
        self.direction.classify(d1, d2) && within_gap(d1, d2, self.max_gap)
    }

    /// First crossing of `values`, or `None` when there is none.
    pub fn find_first<I, T>(&self, values: I) -> Option<Crossing<T>>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
        P: Fn(&T) -> S,
    {
        self.crossings(values).next()
    }

    /// Lazy iterator over every crossing of `values`.
    ///
    /// Each search resumes at the previous crossing's arrival element, so
    /// consecutive crossings may share an element. The sequence is read once.
    pub fn crossings<I, T>(&self, values: I) -> Crossings<'_, I::IntoIter, P, S>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
        P: Fn(&T) -> S,
    {
        Crossings {
            detector: self,
            pairs: AdjacentPairs::new(values.into_iter()),
        }
    }

    /// Every crossing's arrival element, in order.
    pub fn collect_all<I, T>(&self, values: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
        P: Fn(&T) -> S,
    {
        let mut out = Vec::new();
        self.collect_all_into(values, &mut out);
        out
    }

    /// Append every crossing's arrival element to `sink`.
    ///
    /// ## Returns
    ///
    /// Number of elements emitted.
    pub fn collect_all_into<I, T, K>(&self, values: I, sink: &mut K) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Clone,
        P: Fn(&T) -> S,
        K: CrossingSink<T> + ?Sized,
    {
        let mut emitted = 0;
        for crossing in self.crossings(values) {
            sink.accept(crossing.value);
            emitted += 1;
        }
        debug!(direction = %self.direction, emitted, "zero-crossing scan finished");
        emitted
    }

    /// Copy `values` into `sink` up to and including the first crossing's
    /// arrival element.
    ///
    /// ## Returns
    ///
    /// Index of the arrival element, or `None` when the whole sequence was
    /// copied without finding a crossing.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use zero_crossing::ScalarDetector;
    ///
    /// let mut prefix = Vec::new();
    /// let index = ScalarDetector::new().copy_until([3, 2, -1, -4], &mut prefix);
    /// assert_eq!(index, Some(2));
    /// assert_eq!(prefix, vec![3, 2, -1]);
    /// ```
    pub fn copy_until<I, T, K>(&self, values: I, sink: &mut K) -> Option<usize>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
        P: Fn(&T) -> S,
        K: CrossingSink<T> + ?Sized,
    {
        let mut pairs = AdjacentPairs::new(values.into_iter());
        let index = pairs.copy_until(|a, b| self.accepts(a, b), sink);
        debug!(
            direction = %self.direction,
            copied = pairs.consumed(),
            ?index,
            "copy-until scan finished"
        );
        index
    }
}

// =============================================================================
// CROSSINGS ITERATOR
// =============================================================================

/// Iterator returned by [`CrossingDetector::crossings`].
pub struct Crossings<'d, I: Iterator, P, S> {
    detector: &'d CrossingDetector<P, S>,
    pairs: AdjacentPairs<I>,
}

/// Clones share the detector and continue from the same scan position.
impl<I, P, S> Clone for Crossings<'_, I, P, S>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            detector: self.detector,
            pairs: self.pairs.clone(),
        }
    }
}

impl<I, P, S> Iterator for Crossings<'_, I, P, S>
where
    I: Iterator,
    I::Item: Clone,
    P: Fn(&I::Item) -> S,
    S: Scalar,
{
    type Item = Crossing<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let detector = self.detector;
        let (index, value) = self.pairs.find_pair(|a, b| detector.accepts(a, b))?;
        trace!(index, "zero crossing found");
        Some(Crossing { index, value })
    }
}
