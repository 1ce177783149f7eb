//! # Intervals
//!
//! Closed real intervals `[min, max]` and uniform sampling over them.
//!
//! ## Exclusive Variants
//!
//! `uniform_samples_exclude_min(n)` equals `uniform_samples(n + 1)` without
//! its first element, and `uniform_samples_exclude_max(n)` equals it without
//! its last element. Both shrink the interval by one step `length / n` at
//! the excluded end and sample `n` points over what remains.

use serde::{Deserialize, Serialize};

use crate::error::SamplingResult;
use crate::linspace::{check_sample_count, linspace};

// =============================================================================
// INTERVAL
// =============================================================================

/// Closed interval with `min <= max`.
///
/// ## Example
///
/// ```rust
/// use sampling::Interval;
///
/// let interval = Interval::new(0.0, -3.4);
/// assert_eq!(interval.min(), -3.4);
/// assert_eq!(interval.max(), 0.0);
/// assert!(interval.contains(-0.1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IntervalBounds")]
pub struct Interval {
    min: f64,
    max: f64,
}

/// Serialized form; bounds are re-normalized on load.
#[derive(Deserialize)]
struct IntervalBounds {
    min: f64,
    max: f64,
}

impl From<IntervalBounds> for Interval {
    fn from(bounds: IntervalBounds) -> Self {
        Interval::new(bounds.min, bounds.max)
    }
}

impl Interval {
    /// Interval spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let (min, max) = if b < a { (b, a) } else { (a, b) };
        Self { min, max }
    }

    /// Lower end.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper end.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `x` lies in `[min, max]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// `count` evenly spaced samples from `min` to `max` inclusive.
    pub fn uniform_samples(&self, count: usize) -> SamplingResult<Vec<f64>> {
        linspace(self.min, self.max, count)
    }

    /// `count` evenly spaced samples in `(min, max]`.
    pub fn uniform_samples_exclude_min(&self, count: usize) -> SamplingResult<Vec<f64>> {
        check_sample_count(count)?;
        let step = self.length() / count as f64;
        Interval::new(self.min + step, self.max).uniform_samples(count)
    }

    /// `count` evenly spaced samples in `[min, max)`.
    pub fn uniform_samples_exclude_max(&self, count: usize) -> SamplingResult<Vec<f64>> {
        check_sample_count(count)?;
        let step = self.length() / count as f64;
        Interval::new(self.min, self.max - step).uniform_samples(count)
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Whether `x` lies inside `interval`, ends included.
#[must_use]
pub fn is_inside(x: f64, interval: &Interval) -> bool {
    interval.contains(x)
}

/// See [`Interval::uniform_samples`].
pub fn uniform_samples(interval: &Interval, count: usize) -> SamplingResult<Vec<f64>> {
    interval.uniform_samples(count)
}

/// See [`Interval::uniform_samples_exclude_min`].
pub fn uniform_samples_exclude_min(interval: &Interval, count: usize) -> SamplingResult<Vec<f64>> {
    interval.uniform_samples_exclude_min(count)
}

/// See [`Interval::uniform_samples_exclude_max`].
pub fn uniform_samples_exclude_max(interval: &Interval, count: usize) -> SamplingResult<Vec<f64>> {
    interval.uniform_samples_exclude_max(count)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplingError;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_normalizes_and_contains() {
        let interval = Interval::new(0.0, -3.4);
        assert!(!is_inside(0.1, &interval));
        assert!(!is_inside(-10.0, &interval));
        assert!(is_inside(-0.1, &interval));
        assert_relative_eq!(interval.min(), -3.4);
        assert_relative_eq!(interval.max(), 0.0);
    }

    #[test]
    fn test_ends_are_inside() {
        let interval = Interval::new(1.0, 2.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(2.0));
        assert_relative_eq!(interval.length(), 1.0);
    }

    #[test]
    fn test_exclude_min() {
        let interval = Interval::new(0.0, 3.14);
        let count = 10;
        let full = uniform_samples(&interval, count + 1).unwrap();
        let no_min = uniform_samples_exclude_min(&interval, count).unwrap();

        assert_eq!(no_min.len(), count);
        for (expected, actual) in full[1..].iter().zip(&no_min) {
            assert_relative_eq!(*expected, *actual, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_exclude_max() {
        let interval = Interval::new(0.0, 3.14);
        let count = 10;
        let full = uniform_samples(&interval, count + 1).unwrap();
        let no_max = uniform_samples_exclude_max(&interval, count).unwrap();

        assert_eq!(no_max.len(), count);
        for (expected, actual) in full[..count].iter().zip(&no_max) {
            assert_relative_eq!(*expected, *actual, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_exclusive_variants_need_two_samples() {
        let interval = Interval::new(0.0, 1.0);
        assert!(matches!(
            interval.uniform_samples_exclude_min(1),
            Err(SamplingError::InsufficientSamples { requested: 1, .. })
        ));
        assert!(interval.uniform_samples_exclude_max(0).is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_bounds() {
        let interval = Interval::new(5.0, -5.0);
        let json = serde_json::to_string(&interval).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
        assert!(json.contains("\"min\":-5.0"));
    }

    #[test]
    fn test_deserialize_normalizes_swapped_bounds() {
        let interval: Interval = serde_json::from_str(r#"{"min": 2.0, "max": -1.0}"#).unwrap();
        assert_eq!(interval, Interval::new(-1.0, 2.0));
    }
}
