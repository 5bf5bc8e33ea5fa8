//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_component_is_zero() {
    assert_eq!(DEFAULT_COMPONENT, 0.0);
}

#[test]
fn test_default_normalize_scalar_is_unit() {
    assert_eq!(DEFAULT_NORMALIZE_SCALAR, 1.0);
}

// =============================================================================
// ANGLE TESTS
// =============================================================================

#[test]
fn test_half_turn_converts_to_pi() {
    let radians = DEGREES_PER_HALF_TURN * std::f64::consts::PI / DEGREES_PER_HALF_TURN;
    assert_eq!(radians, std::f64::consts::PI);
}

#[test]
fn test_angle_rounding_within_limit() {
    assert!(
        ANGLE_ROUNDING_DECIMALS <= MAX_ROUNDING_DECIMALS,
        "default rounding must be a valid configuration"
    );
}
