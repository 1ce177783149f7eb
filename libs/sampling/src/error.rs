//! # Error Types
//!
//! Errors raised by the sampling functions. The only failure is a domain
//! error: asking for fewer samples than are needed to define a spacing.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while sampling an interval.
///
/// ## Example
///
/// ```rust
/// use sampling::{linspace, SamplingError};
///
/// match linspace(0.0, 10.0, 1) {
///     Err(SamplingError::InsufficientSamples { requested, .. }) => assert_eq!(requested, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// Fewer samples requested than the minimum.
    #[error("linspace: number of samples must be at least {minimum}, got {requested}")]
    InsufficientSamples {
        /// Requested sample count
        requested: usize,
        /// Smallest accepted sample count
        minimum: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for sampling operations.
pub type SamplingResult<T> = Result<T, SamplingError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = SamplingError::InsufficientSamples {
            requested: 1,
            minimum: 2,
        };
        let message = err.to_string();
        assert!(message.contains("at least 2"));
        assert!(message.contains("got 1"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SamplingError>();
    }
}
