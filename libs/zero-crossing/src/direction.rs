//! # Crossing Direction
//!
//! Sign classification for a pair of adjacent values.
//!
//! ## Rule
//!
//! The departing value must be strictly signed while the arriving value is
//! compared non-strictly:
//!
//! ```text
//! Rising:  d1 < 0 && d2 >= 0
//! Falling: d1 > 0 && d2 <= 0
//! Any:     Rising || Falling
//! ```
//!
//! So `(-1, 0)` is a rising crossing, `(0, -1)` is not a falling crossing and
//! `(0, 0)` is never a crossing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gap::Scalar;

// =============================================================================
// DIRECTION
// =============================================================================

/// Which sign transitions count as a crossing.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::Direction;
///
/// assert!(Direction::Rising.classify(-1.0, 0.0));
/// assert!(!Direction::Falling.classify(0.0, -1.0));
/// assert!(Direction::Any.classify(2, -3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Either rising or falling.
    #[default]
    Any,
    /// From a negative value to a non-negative one.
    Rising,
    /// From a positive value to a non-positive one.
    Falling,
}

impl Direction {
    /// Decide whether `d1 → d2` is a crossing in this direction.
    #[must_use]
    pub fn classify<S: Scalar>(self, d1: S, d2: S) -> bool {
        let zero = S::zero();
        let rising = d1 < zero && d2 >= zero;
        let falling = d1 > zero && d2 <= zero;

        match self {
            Direction::Any => rising || falling,
            Direction::Rising => rising,
            Direction::Falling => falling,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Any => write!(f, "any"),
            Direction::Rising => write!(f, "rising"),
            Direction::Falling => write!(f, "falling"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
