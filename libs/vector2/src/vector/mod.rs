//! The `Vector2` value type.
//!
//! Components are public and may be reassigned freely, so every operation
//! that reads the receiver checks it again instead of trusting construction.
//! Arithmetic comes in two flavours: `add`, `sub`, `mul` and `div` update the
//! receiver in place, while the `*_new` variants leave it untouched and
//! return a fresh vector.

use std::f64::consts::PI;
use std::fmt;

use config::constants::{DEFAULT_COMPONENT, DEFAULT_NORMALIZE_SCALAR, DEGREES_PER_HALF_TURN};
use glam::DVec2;

use crate::angle::angle_to_vector2;
use crate::coordinates::{checked_other, Coordinates};
use crate::error::{VectorError, VectorResult};
use crate::numeric::NumericInput;

/// A two-dimensional vector with `f64` components.
///
/// # Examples
/// ```
/// use vector2::Vector2;
///
/// let mut position = Vector2::new(1.0, 1.0).unwrap();
/// position.add(&(2.0, 3.0)).unwrap();
/// assert_eq!(position.to_string(), "Vector2(3, 4)");
/// assert_eq!(position.length().unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates a vector, rejecting NaN components.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// assert!(Vector2::new(0.0, 1.0).is_ok());
    /// assert!(Vector2::new(f64::NAN, 1.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> VectorResult<Self> {
        if x.is_nan() || y.is_nan() {
            return Err(VectorError::components());
        }
        Ok(Self { x, y })
    }

    /// Creates a vector where absent components default to `0`.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let v = Vector2::from_optional(Some(1.0), None).unwrap();
    /// assert_eq!((v.x, v.y), (1.0, 0.0));
    /// ```
    pub fn from_optional(x: Option<f64>, y: Option<f64>) -> VectorResult<Self> {
        Self::new(
            x.unwrap_or(DEFAULT_COMPONENT),
            y.unwrap_or(DEFAULT_COMPONENT),
        )
    }

    /// Creates a vector from numeric-like inputs such as numeric strings.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let v = Vector2::parse("1.5", &2).unwrap();
    /// assert_eq!((v.x, v.y), (1.5, 2.0));
    /// assert!(Vector2::parse("one", "two").is_err());
    /// ```
    pub fn parse<X, Y>(x: &X, y: &Y) -> VectorResult<Self>
    where
        X: NumericInput + ?Sized,
        Y: NumericInput + ?Sized,
    {
        let x = x.to_number().map_err(|_| VectorError::components())?;
        let y = y.to_number().map_err(|_| VectorError::components())?;
        Self::new(x, y)
    }

    /// Builds a vector pointing at `angle` degrees, rounded to two decimals.
    ///
    /// Same as [`angle_to_vector2`].
    pub fn from_angle_degrees(angle: f64) -> VectorResult<Self> {
        angle_to_vector2(angle)
    }

    fn checked(&self) -> VectorResult<(f64, f64)> {
        if self.x.is_nan() || self.y.is_nan() {
            return Err(VectorError::receiver());
        }
        Ok((self.x, self.y))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Exact componentwise equality with `other`.
    ///
    /// # Errors
    /// Fails when either vector has a NaN component.
    pub fn compare<C: Coordinates + ?Sized>(&self, other: &C) -> VectorResult<bool> {
        let (ox, oy) = checked_other(other)?;
        let (x, y) = self.checked().map_err(|_| VectorError::other())?;
        Ok(x == ox && y == oy)
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let mut v = Vector2::new(1.0, 1.0).unwrap();
    /// assert_eq!(v.length().unwrap(), 2f64.sqrt());
    /// v.x = f64::NAN;
    /// assert!(v.length().is_err());
    /// ```
    pub fn length(&self) -> VectorResult<f64> {
        let (x, y) = self.checked()?;
        Ok((x * x + y * y).sqrt())
    }

    /// Alias for [`Vector2::length`].
    pub fn magnitude(&self) -> VectorResult<f64> {
        self.length()
    }

    /// Unit-length copy of this vector.
    ///
    /// Same as `normalize_to(1.0)`.
    pub fn normalize(&self) -> VectorResult<Self> {
        self.normalize_to(DEFAULT_NORMALIZE_SCALAR)
    }

    /// Copy of this vector scaled to length `scalar`.
    ///
    /// A zero `scalar` is treated as absent and falls back to `1`. The zero
    /// vector has no direction and is returned unchanged. The receiver is
    /// never modified.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let v = Vector2::new(3.0, 4.0).unwrap().normalize_to(10.0).unwrap();
    /// assert_eq!((v.x, v.y), (6.0, 8.0));
    /// assert_eq!(Vector2::ZERO.normalize_to(10.0).unwrap(), Vector2::ZERO);
    /// ```
    pub fn normalize_to(&self, scalar: f64) -> VectorResult<Self> {
        if scalar.is_nan() {
            return Err(VectorError::scalar());
        }
        let scalar = if scalar == 0.0 {
            DEFAULT_NORMALIZE_SCALAR
        } else {
            scalar
        };

        let length = self.length()?;
        if length == 0.0 {
            return Ok(*self);
        }
        Self::new(self.x / length * scalar, self.y / length * scalar)
    }

    /// Angle of this vector in radians, `atan2(y, x)`.
    pub fn vector_to_angle_radians(&self) -> VectorResult<f64> {
        let (x, y) = self.checked()?;
        Ok(y.atan2(x))
    }

    /// Angle of this vector in degrees.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let v = Vector2::new(1.0, 1.0).unwrap();
    /// assert!((v.vector_to_angle_degrees().unwrap() - 45.0).abs() < 1e-12);
    /// ```
    pub fn vector_to_angle_degrees(&self) -> VectorResult<f64> {
        Ok(self.vector_to_angle_radians()? * DEGREES_PER_HALF_TURN / PI)
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let a = Vector2::new(10.0, 5.0).unwrap();
    /// assert_eq!(a.distance(&(5.0, 10.0)).unwrap(), 50f64.sqrt());
    /// ```
    pub fn distance<C: Coordinates + ?Sized>(&self, other: &C) -> VectorResult<f64> {
        self.sub_new(other)?.length()
    }

    // =========================================================================
    // ARITHMETIC
    // =========================================================================

    /// Componentwise sum as a new vector.
    pub fn add_new<C: Coordinates + ?Sized>(&self, other: &C) -> VectorResult<Self> {
        let (ox, oy) = checked_other(other)?;
        Self::new(self.x + ox, self.y + oy)
    }

    /// Adds `other` to this vector in place.
    pub fn add<C: Coordinates + ?Sized>(&mut self, other: &C) -> VectorResult<()> {
        let (ox, oy) = checked_other(other)?;
        self.x += ox;
        self.y += oy;
        Ok(())
    }

    /// Componentwise difference `self - other` as a new vector.
    pub fn sub_new<C: Coordinates + ?Sized>(&self, other: &C) -> VectorResult<Self> {
        let (ox, oy) = checked_other(other)?;
        Self::new(self.x - ox, self.y - oy)
    }

    /// Subtracts `other` from this vector in place.
    pub fn sub<C: Coordinates + ?Sized>(&mut self, other: &C) -> VectorResult<()> {
        let (ox, oy) = checked_other(other)?;
        self.x -= ox;
        self.y -= oy;
        Ok(())
    }

    /// Both components multiplied by `scalar`, as a new vector.
    pub fn mul_new(&self, scalar: f64) -> VectorResult<Self> {
        if scalar.is_nan() {
            return Err(VectorError::scalar());
        }
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Multiplies both components by `scalar` in place.
    pub fn mul(&mut self, scalar: f64) -> VectorResult<()> {
        if scalar.is_nan() {
            return Err(VectorError::scalar());
        }
        self.x *= scalar;
        self.y *= scalar;
        Ok(())
    }

    /// Both components divided by `divisor`, as a new vector.
    ///
    /// # Errors
    /// Fails when `divisor` is NaN or zero.
    pub fn div_new(&self, divisor: f64) -> VectorResult<Self> {
        check_divisor(divisor)?;
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Divides both components by `divisor` in place.
    ///
    /// # Errors
    /// Fails when `divisor` is NaN or zero; the receiver is left untouched.
    pub fn div(&mut self, divisor: f64) -> VectorResult<()> {
        check_divisor(divisor)?;
        self.x /= divisor;
        self.y /= divisor;
        Ok(())
    }
}

fn check_divisor(divisor: f64) -> VectorResult<()> {
    if divisor.is_nan() || divisor == 0.0 {
        return Err(VectorError::divisor());
    }
    Ok(())
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", Component(self.x), Component(self.y))
    }
}

/// Formats a component with JavaScript number-to-string rules.
///
/// Negative zero prints as `0`. Magnitudes of at least `1e21` or below
/// `1e-6` use exponent notation with an explicit sign (`1e+21`, `1e-7`).
/// Everything else is the shortest round-trip decimal.
struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = value.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            let exp = format!("{value:e}");
            return match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{mantissa}e+{power}")
                }
                _ => f.write_str(&exp),
            };
        }
        write!(f, "{value}")
    }
}

impl Coordinates for Vector2 {
    fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl TryFrom<(f64, f64)> for Vector2 {
    type Error = VectorError;

    fn try_from((x, y): (f64, f64)) -> VectorResult<Self> {
        Self::new(x, y)
    }
}

impl TryFrom<[f64; 2]> for Vector2 {
    type Error = VectorError;

    fn try_from([x, y]: [f64; 2]) -> VectorResult<Self> {
        Self::new(x, y)
    }
}

impl TryFrom<DVec2> for Vector2 {
    type Error = VectorError;

    fn try_from(value: DVec2) -> VectorResult<Self> {
        Self::new(value.x, value.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(value: Vector2) -> Self {
        DVec2::new(value.x, value.y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(value: Vector2) -> Self {
        (value.x, value.y)
    }
}

#[cfg(test)]
mod tests;
