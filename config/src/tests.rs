//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_min_linspace_samples_defines_a_spacing() {
    // A single sample has no (count - 1) divisor
    assert!(MIN_LINSPACE_SAMPLES >= 2);
}

// =============================================================================
// ANGLE TESTS
// =============================================================================

#[test]
fn test_wrap_tolerance_is_positive() {
    assert!(WRAP_RELATIVE_TOLERANCE > 0.0, "tolerance must be positive");
}

#[test]
fn test_wrap_tolerance_above_double_precision() {
    assert!(
        WRAP_RELATIVE_TOLERANCE > f64::EPSILON,
        "tolerance must leave room for accumulated rounding"
    );
}

// =============================================================================
// TEXT READING TESTS
// =============================================================================

#[test]
fn test_default_comment_characters_are_not_literal_characters() {
    for c in DEFAULT_COMMENT_CHARACTERS.chars() {
        assert!(!LITERAL_CHARACTERS.contains(c));
    }
}

#[test]
fn test_literal_characters_cover_grammar() {
    for c in ['0', '9', '+', '-', '.', 'e', 'E'] {
        assert!(LITERAL_CHARACTERS.contains(c));
    }
}
