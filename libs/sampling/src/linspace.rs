//! # Linear Spacing
//!
//! Evenly spaced values over a closed range.
//!
//! ```text
//! value[i] = begin + i * (end - begin) / (count - 1),  i in 0..count
//! ```

use config::constants::MIN_LINSPACE_SAMPLES;
use tracing::warn;

use crate::error::{SamplingError, SamplingResult};

/// Reject sample counts that cannot define a spacing.
pub(crate) fn check_sample_count(count: usize) -> SamplingResult<()> {
    if count < MIN_LINSPACE_SAMPLES {
        warn!(requested = count, minimum = MIN_LINSPACE_SAMPLES, "rejected sample count");
        return Err(SamplingError::InsufficientSamples {
            requested: count,
            minimum: MIN_LINSPACE_SAMPLES,
        });
    }
    Ok(())
}

/// `count` evenly spaced values from `begin` to `end`, both included.
///
/// `begin` may be larger than `end`, in which case the values decrease.
///
/// ## Errors
///
/// [`SamplingError::InsufficientSamples`] when `count < 2`.
///
/// ## Example
///
/// ```rust
/// use sampling::linspace;
///
/// let values = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 10.0, 1).is_err());
/// ```
pub fn linspace(begin: f64, end: f64, count: usize) -> SamplingResult<Vec<f64>> {
    check_sample_count(count)?;

    let divisor = (count - 1) as f64;
    Ok((0..count)
        .map(|i| begin + i as f64 * (end - begin) / divisor)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_fewer_than_two_samples() {
        assert_eq!(
            linspace(0.0, 10.0, 1),
            Err(SamplingError::InsufficientSamples {
                requested: 1,
                minimum: 2
            })
        );
        assert!(linspace(0.0, 10.0, 0).is_err());
    }

    #[test]
    fn test_returns_requested_count() {
        assert_eq!(linspace(0.0, 2.5, 113).unwrap().len(), 113);
    }

    #[test]
    fn test_values() {
        let values = linspace(0.0, 1.0, 101).unwrap();
        assert_relative_eq!(values[0], 0.0);
        assert_relative_eq!(values[1], 0.01);
        assert_relative_eq!(values[100], 1.0);
    }

    #[test]
    fn test_two_samples_are_the_endpoints() {
        assert_eq!(linspace(-3.0, 4.0, 2).unwrap(), vec![-3.0, 4.0]);
    }

    #[test]
    fn test_descending_range() {
        let values = linspace(1.0, -1.0, 3).unwrap();
        assert_eq!(values, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_degenerate_range_repeats_value() {
        assert_eq!(linspace(2.0, 2.0, 4).unwrap(), vec![2.0; 4]);
    }
}
