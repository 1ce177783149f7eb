//! # Zero-Crossing Detection
//!
//! Locates sign changes between adjacent elements of single-pass sequences.
//!
//! ## Architecture
//!
//! ```text
//! Direction::classify ─┐
//! within_gap ──────────┼─→ CrossingDetector ─→ AdjacentPairs ─→ CrossingSink
//! projection ──────────┘
//! ```
//!
//! A crossing is an adjacent pair whose (projected) values go from strictly
//! negative to non-negative (rising) or from strictly positive to
//! non-positive (falling). The emitted element is always the pair's second,
//! untransformed element.
//!
//! ## Example
//!
//! ```rust
//! use zero_crossing::{zero_cross, zero_cross_within_gap};
//!
//! assert_eq!(zero_cross([-2.0, -1.0, 1.0, -3.0, -2.0, 1.0]), vec![1.0, -3.0, 1.0]);
//! assert_eq!(zero_cross_within_gap([-2.0, -1.0, 1.0, -30.0], 5.0), vec![1.0]);
//! ```
//!
//! ## Sub-ranges
//!
//! Every function takes an `IntoIterator`. Scan part of a slice by passing a
//! sub-slice (`&data[a..b]`) or an adapted iterator; indices in the results are
//! relative to the start of what was passed.
//!
//! ## Failure Semantics
//!
//! Nothing here fails. "No crossing" is an empty output or `None`.

pub mod batch;
pub mod detector;
pub mod direction;
pub mod gap;
pub mod scanner;
pub mod sink;

// Re-export public API
pub use batch::zero_cross_batch;
pub use detector::{Crossing, CrossingDetector, Crossings, ScalarDetector};
pub use direction::Direction;
pub use gap::{within_gap, Scalar};
pub use scanner::AdjacentPairs;
pub use sink::{CrossingSink, SinkFn};

// =============================================================================
// PUBLIC API
// =============================================================================

/// First crossing in any direction.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::{find_zero_cross, Crossing};
///
/// assert_eq!(find_zero_cross([4, 3, -2, 5]), Some(Crossing { index: 2, value: -2 }));
/// assert_eq!(find_zero_cross([4, 3]), None);
/// ```
pub fn find_zero_cross<I, S>(values: I) -> Option<Crossing<S>>
where
    I: IntoIterator<Item = S>,
    S: Scalar,
{
    ScalarDetector::<S>::new().find_first(values)
}

/// Every crossing's arrival value, any direction, no gap limit.
pub fn zero_cross<I, S>(values: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: Scalar,
{
    ScalarDetector::<S>::new().collect_all(values)
}

/// [`zero_cross`] writing into a caller-supplied sink.
///
/// ## Returns
///
/// Number of values emitted.
pub fn zero_cross_into<I, S, K>(values: I, sink: &mut K) -> usize
where
    I: IntoIterator<Item = S>,
    S: Scalar,
    K: CrossingSink<S> + ?Sized,
{
    ScalarDetector::<S>::new().collect_all_into(values, sink)
}

/// Every crossing in `direction`.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::{zero_cross_in_direction, Direction};
///
/// assert!(zero_cross_in_direction([-1.0, 1.0], Direction::Falling).is_empty());
/// assert_eq!(zero_cross_in_direction([-1.0, 1.0], Direction::Rising), vec![1.0]);
/// ```
pub fn zero_cross_in_direction<I, S>(values: I, direction: Direction) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: Scalar,
{
    ScalarDetector::<S>::new()
        .with_direction(direction)
        .collect_all(values)
}

/// Every crossing whose two values differ by less than `max_gap`.
pub fn zero_cross_within_gap<I, S>(values: I, max_gap: S) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: Scalar,
{
    ScalarDetector::<S>::new()
        .with_max_gap(max_gap)
        .collect_all(values)
}

/// Copy values into `sink` up to and including the first crossing.
///
/// ## Returns
///
/// Index of the crossing's arrival value, or `None` if the whole sequence
/// was copied.
pub fn copy_until_zero_cross<I, S, K>(values: I, sink: &mut K) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: Scalar,
    K: CrossingSink<S> + ?Sized,
{
    ScalarDetector::<S>::new().copy_until(values, sink)
}
