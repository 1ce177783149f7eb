//! # Gap Filter
//!
//! Rejects crossings whose two values are too far apart, which usually means
//! a discontinuity (a wrapped phase, a reset counter) rather than a real
//! sign change.

use num_traits::Signed;

/// Projected value type the detector works on.
///
/// Needs ordering against zero and an absolute difference. Implemented for
/// `f32`, `f64` and the signed integers.
pub trait Scalar: Copy + PartialOrd + Signed {
    /// `|self - other|`, or `None` when it does not fit in `Self`.
    fn gap(self, other: Self) -> Option<Self>;
}

macro_rules! float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn gap(self, other: Self) -> Option<Self> {
                Some((self - other).abs())
            }
        }
    )*};
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn gap(self, other: Self) -> Option<Self> {
                self.checked_sub(other)?.checked_abs()
            }
        }
    )*};
}

float_scalar!(f32, f64);
integer_scalar!(i8, i16, i32, i64, i128, isize);

/// Check `|d1 - d2| < threshold`.
///
/// Without a threshold every pair passes. A difference too large for the
/// scalar type is never within the threshold.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::within_gap;
///
/// assert!(within_gap(1.0, -3.0, Some(5.0)));
/// assert!(!within_gap(1.0, -30.0, Some(5.0)));
/// assert!(within_gap(1.0, -30.0, None));
/// assert!(!within_gap(100_i8, -100_i8, Some(10)));
/// ```
#[inline]
#[must_use]
pub fn within_gap<S: Scalar>(d1: S, d2: S, threshold: Option<S>) -> bool {
    match threshold {
        None => true,
        Some(threshold) => d1.gap(d2).is_some_and(|gap| gap < threshold),
    }
}
