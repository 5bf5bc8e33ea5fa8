//! Angle to vector conversion.

use std::f64::consts::PI;

use config::constants::{RoundingConfig, DEGREES_PER_HALF_TURN};

use crate::error::{VectorError, VectorResult};
use crate::vector::Vector2;

/// Builds the direction vector for `angle` degrees.
///
/// Both components are rounded to two decimals, so cardinal angles give
/// exact unit vectors.
///
/// # Examples
/// ```
/// use vector2::angle_to_vector2;
/// let v = angle_to_vector2(180.0).unwrap();
/// assert_eq!((v.x, v.y), (-1.0, 0.0));
/// assert!(angle_to_vector2(f64::NAN).is_err());
/// ```
pub fn angle_to_vector2(angle: f64) -> VectorResult<Vector2> {
    angle_to_vector2_with(angle, RoundingConfig::default())
}

/// Builds the direction vector for `angle` degrees using `rounding`.
///
/// # Examples
/// ```
/// use config::constants::RoundingConfig;
/// use vector2::angle_to_vector2_with;
/// let precise = RoundingConfig::new(4).unwrap();
/// let v = angle_to_vector2_with(45.0, precise).unwrap();
/// assert_eq!((v.x, v.y), (0.7071, 0.7071));
/// ```
pub fn angle_to_vector2_with(angle: f64, rounding: RoundingConfig) -> VectorResult<Vector2> {
    if angle.is_nan() {
        return Err(VectorError::angle());
    }
    let radians = angle * PI / DEGREES_PER_HALF_TURN;
    Vector2::new(rounding.round(radians.cos()), rounding.round(radians.sin()))
}
