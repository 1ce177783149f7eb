//! # Sampling
//!
//! Linear subdivision of intervals and angle normalization.
//!
//! ## Example
//!
//! ```rust
//! use sampling::{linspace, wrap_minus_pi_pi, Interval};
//! use std::f64::consts::PI;
//!
//! let samples = linspace(0.0, 1.0, 101).unwrap();
//! assert!((samples[1] - 0.01).abs() < 1e-15);
//!
//! let open_right = Interval::new(1.0, 0.0).uniform_samples_exclude_max(4).unwrap();
//! assert_eq!(open_right, vec![0.0, 0.25, 0.5, 0.75]);
//!
//! assert_eq!(wrap_minus_pi_pi(PI), -PI);
//! ```
//!
//! ## Errors
//!
//! Only sample generation can fail, and only with
//! [`SamplingError::InsufficientSamples`] when fewer than two samples are
//! requested. Angle wrapping is total.

pub mod error;
pub mod interval;
pub mod linspace;
pub mod wrap;

// Re-export public API
pub use error::{SamplingError, SamplingResult};
pub use interval::{
    is_inside, uniform_samples, uniform_samples_exclude_max, uniform_samples_exclude_min, Interval,
};
pub use linspace::linspace;
pub use wrap::{wrap_2pi, wrap_minus_pi_pi};
