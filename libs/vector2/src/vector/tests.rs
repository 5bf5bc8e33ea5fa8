//! Tests for the Vector2 value type.

use approx::assert_relative_eq;

use super::*;

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y).unwrap()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_vector2_creation() {
    let vec = v(1.0, 2.0);
    assert_eq!(vec.x, 1.0);
    assert_eq!(vec.y, 2.0);
}

/// Absent components default to zero.
///
/// # Examples
/// ```
/// use vector2::Vector2;
/// assert_eq!(Vector2::from_optional(None, None).unwrap(), Vector2::ZERO);
/// ```
#[test]
fn test_construction_defaults() {
    assert_eq!(Vector2::from_optional(None, None).unwrap(), v(0.0, 0.0));
    assert_eq!(Vector2::from_optional(Some(1.0), None).unwrap(), v(1.0, 0.0));
    assert_eq!(Vector2::from_optional(Some(0.0), Some(1.0)).unwrap(), v(0.0, 1.0));
    assert_eq!(Vector2::from_optional(Some(1.0), Some(1.0)).unwrap(), v(1.0, 1.0));
    assert_eq!(Vector2::default(), Vector2::ZERO);
}

#[test]
fn test_construction_rejects_nan() {
    assert_eq!(Vector2::new(f64::NAN, 0.0).unwrap_err(), VectorError::components());
    assert_eq!(Vector2::new(0.0, f64::NAN).unwrap_err(), VectorError::components());
    assert!(Vector2::from_optional(Some(f64::NAN), None).is_err());
}

#[test]
fn test_construction_accepts_infinity() {
    let vec = Vector2::new(f64::INFINITY, f64::NEG_INFINITY).unwrap();
    assert!(vec.x.is_infinite());
}

#[test]
fn test_parse_numeric_like_inputs() {
    assert_eq!(Vector2::parse("1", "2.5").unwrap(), v(1.0, 2.5));
    assert_eq!(Vector2::parse(&3, " -4 ").unwrap(), v(3.0, -4.0));
    assert_eq!(
        Vector2::parse("{}", &1).unwrap_err(),
        VectorError::components()
    );
    assert!(Vector2::parse(&1.0, "").is_err());
}

#[test]
fn test_conversions() {
    assert_eq!(Vector2::try_from((1.0, 2.0)).unwrap(), v(1.0, 2.0));
    assert_eq!(Vector2::try_from([3.0, 4.0]).unwrap(), v(3.0, 4.0));
    assert_eq!(Vector2::try_from(DVec2::new(5.0, 6.0)).unwrap(), v(5.0, 6.0));
    assert!(Vector2::try_from((f64::NAN, 0.0)).is_err());

    let glam_vec: DVec2 = v(7.0, 8.0).into();
    assert_eq!(glam_vec, DVec2::new(7.0, 8.0));
    let pair: (f64, f64) = v(9.0, 10.0).into();
    assert_eq!(pair, (9.0, 10.0));
}

// =============================================================================
// COMPARISON & MAGNITUDE
// =============================================================================

#[test]
fn test_compare() {
    let a = v(1.0, 1.0);
    assert!(a.compare(&a).unwrap());
    assert!(a.compare(&v(1.0, 1.0)).unwrap());
    assert!(!a.compare(&Vector2::ZERO).unwrap());
    assert!(a.compare(&(1.0, 1.0)).unwrap());
    assert!(a.compare(&DVec2::ONE).unwrap());
}

#[test]
fn test_compare_rejects_nan_on_either_side() {
    let mut a = v(1.0, 1.0);
    assert_eq!(a.compare(&(f64::NAN, 1.0)).unwrap_err(), VectorError::other());
    a.y = f64::NAN;
    assert_eq!(a.compare(&(1.0, 1.0)).unwrap_err(), VectorError::other());
}

#[test]
fn test_length() {
    assert_eq!(v(1.0, 1.0).length().unwrap(), 2f64.sqrt());
    assert_eq!(v(3.0, -4.0).length().unwrap(), 5.0);
    assert_eq!(v(3.0, -4.0).magnitude().unwrap(), 5.0);
    assert_eq!(Vector2::ZERO.length().unwrap(), 0.0);
}

#[test]
fn test_length_fails_after_mutation_to_nan() {
    let mut vec = v(1.0, 1.0);
    vec.x = f64::NAN;
    assert_eq!(vec.length().unwrap_err(), VectorError::receiver());
    assert!(vec.magnitude().is_err());
}

// =============================================================================
// NORMALIZATION
// =============================================================================

#[test]
fn test_normalize() {
    let vec = v(1.0, 1.0);
    let length = vec.length().unwrap();
    let normal = vec.normalize().unwrap();
    assert_eq!(normal.x, 1.0 / length);
    assert_eq!(normal.y, 1.0 / length);
    assert_relative_eq!(normal.length().unwrap(), 1.0, epsilon = 1e-12);
    // receiver untouched
    assert_eq!(vec, v(1.0, 1.0));
}

#[test]
fn test_normalize_zero_vector_is_returned_unchanged() {
    let zero = Vector2::ZERO;
    assert_eq!(zero.normalize().unwrap(), zero);
    assert_eq!(zero.normalize_to(5.0).unwrap(), zero);
}

#[test]
fn test_normalize_to_scalar() {
    let scaled = v(0.0, -2.0).normalize_to(3.0).unwrap();
    assert_eq!(scaled, v(0.0, -3.0));
}

#[test]
fn test_normalize_zero_scalar_falls_back_to_unit() {
    assert_eq!(v(0.0, 4.0).normalize_to(0.0).unwrap(), v(0.0, 1.0));
}

#[test]
fn test_normalize_rejects_nan() {
    assert_eq!(
        v(1.0, 0.0).normalize_to(f64::NAN).unwrap_err(),
        VectorError::scalar()
    );
    let mut vec = v(1.0, 0.0);
    vec.y = f64::NAN;
    assert_eq!(vec.normalize().unwrap_err(), VectorError::receiver());
}

// =============================================================================
// ARITHMETIC
// =============================================================================

#[test]
fn test_add_new_leaves_operands_untouched() {
    let a = v(1.0, 1.0);
    let b = v(-1.0, 2.0);
    let sum = a.add_new(&b).unwrap();
    assert_eq!(sum, v(0.0, 3.0));
    assert_eq!(a, v(1.0, 1.0));
    assert_eq!(b, v(-1.0, 2.0));
}

#[test]
fn test_add_mutates_receiver() {
    let mut a = v(1.0, 1.0);
    let b = v(-1.0, 2.0);
    a.add(&b).unwrap();
    assert_eq!(a, v(0.0, 3.0));
    assert_eq!(b, v(-1.0, 2.0));
}

#[test]
fn test_sub_new_and_sub() {
    let a = v(1.0, 1.0);
    let b = v(-1.0, 2.0);
    assert_eq!(a.sub_new(&b).unwrap(), v(2.0, -1.0));

    let mut c = a;
    c.sub(&b).unwrap();
    assert_eq!(c, v(2.0, -1.0));
    assert_eq!(a, v(1.0, 1.0));
}

#[test]
fn test_additive_ops_reject_nan_operand() {
    let mut a = v(1.0, 1.0);
    let bad = (0.0, f64::NAN);
    assert_eq!(a.add_new(&bad).unwrap_err(), VectorError::other());
    assert_eq!(a.sub_new(&bad).unwrap_err(), VectorError::other());
    assert!(a.add(&bad).is_err());
    assert!(a.sub(&bad).is_err());
    assert_eq!(a, v(1.0, 1.0));
}

#[test]
fn test_mul_new_and_mul() {
    let vec = v(2.0, -2.0);
    assert_eq!(vec.mul_new(4.0).unwrap(), v(8.0, -8.0));

    let mut m = vec;
    m.mul(4.0).unwrap();
    assert_eq!(m, v(8.0, -8.0));
    assert_eq!(vec.mul_new(f64::NAN).unwrap_err(), VectorError::scalar());
    assert!(m.mul(f64::NAN).is_err());
}

#[test]
fn test_div_new_and_div() {
    let vec = v(2.0, -2.0);
    assert_eq!(vec.div_new(4.0).unwrap(), v(0.5, -0.5));

    let mut d = vec;
    d.div(4.0).unwrap();
    assert_eq!(d, v(0.5, -0.5));
}

#[test]
fn test_division_by_zero_is_rejected() {
    let mut vec = v(2.0, -2.0);
    assert_eq!(vec.div_new(0.0).unwrap_err(), VectorError::divisor());
    assert_eq!(vec.div_new(-0.0).unwrap_err(), VectorError::divisor());
    assert_eq!(vec.div_new(f64::NAN).unwrap_err(), VectorError::divisor());
    assert!(vec.div(0.0).is_err());
    assert_eq!(vec, v(2.0, -2.0));
}

#[test]
fn test_overflow_is_not_rejected() {
    let mut vec = v(f64::MAX, 1.0);
    vec.mul(2.0).unwrap();
    assert!(vec.x.is_infinite());
}

// =============================================================================
// ANGLES & DISTANCE
// =============================================================================

#[test]
fn test_vector_to_angle() {
    let vec = v(1.0, 1.0);
    assert_relative_eq!(
        vec.vector_to_angle_radians().unwrap(),
        45.0 * PI / 180.0,
        epsilon = 1e-15
    );
    assert_relative_eq!(vec.vector_to_angle_degrees().unwrap(), 45.0, epsilon = 1e-12);
    assert_relative_eq!(v(-1.0, 0.0).vector_to_angle_degrees().unwrap(), 180.0);
    assert_relative_eq!(v(0.0, -1.0).vector_to_angle_degrees().unwrap(), -90.0);
}

#[test]
fn test_vector_to_angle_rejects_nan() {
    let mut vec = v(1.0, 1.0);
    vec.x = f64::NAN;
    assert!(vec.vector_to_angle_radians().is_err());
    assert!(vec.vector_to_angle_degrees().is_err());
}

#[test]
fn test_distance() {
    let a = v(10.0, 5.0);
    let b = v(5.0, 10.0);
    assert_eq!(a.distance(&b).unwrap(), 50f64.sqrt());
    assert_eq!(a.distance(&a).unwrap(), 0.0);
    assert!(a.distance(&(f64::NAN, 0.0)).is_err());
}

// =============================================================================
// DISPLAY
// =============================================================================

#[test]
fn test_display() {
    assert_eq!(v(1.0, 1.0).to_string(), "Vector2(1, 1)");
    assert_eq!(v(-0.5, 2.25).to_string(), "Vector2(-0.5, 2.25)");
    assert_eq!(Vector2::ZERO.to_string(), "Vector2(0, 0)");
}

#[test]
fn test_display_prints_negative_zero_as_zero() {
    let rotated = Vector2::from_angle_degrees(270.0).unwrap();
    assert_eq!(rotated.to_string(), "Vector2(0, -1)");

    let flipped = Vector2::ZERO.mul_new(-1.0).unwrap();
    assert!(flipped.x.is_sign_negative());
    assert_eq!(flipped.to_string(), "Vector2(0, 0)");
}

#[test]
fn test_display_uses_exponent_outside_decimal_range() {
    assert_eq!(v(1e21, 1e-7).to_string(), "Vector2(1e+21, 1e-7)");
    assert_eq!(v(-1.5e22, 2.5e-8).to_string(), "Vector2(-1.5e+22, 2.5e-8)");
    assert_eq!(v(1e20, 0.000001).to_string(), "Vector2(100000000000000000000, 0.000001)");
    assert_eq!(v(123456.789, -0.25).to_string(), "Vector2(123456.789, -0.25)");
}

#[test]
fn test_display_non_finite_components() {
    let mut vec = v(f64::INFINITY, f64::NEG_INFINITY);
    assert_eq!(vec.to_string(), "Vector2(Infinity, -Infinity)");
    vec.x = f64::NAN;
    assert_eq!(vec.to_string(), "Vector2(NaN, -Infinity)");
}
