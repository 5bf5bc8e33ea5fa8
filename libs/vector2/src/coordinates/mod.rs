//! Capability trait for anything that exposes an x/y pair.
//!
//! Comparison and arithmetic accept any `Coordinates`, so plain tuples,
//! arrays and `glam::DVec2` values can be used as the other operand without
//! converting them first.

use glam::DVec2;

use crate::error::{VectorError, VectorResult};

/// A value exposing numeric `x` and `y` components.
///
/// # Examples
/// ```
/// use vector2::{Coordinates, Vector2};
/// let v = Vector2::new(1.0, 2.0).unwrap();
/// assert!(v.compare(&(1.0, 2.0)).unwrap());
/// assert_eq!([3.0f64, 4.0].xy(), (3.0, 4.0));
/// ```
pub trait Coordinates {
    /// Returns the `(x, y)` pair.
    fn xy(&self) -> (f64, f64);
}

impl Coordinates for (f64, f64) {
    fn xy(&self) -> (f64, f64) {
        *self
    }
}

impl Coordinates for [f64; 2] {
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl Coordinates for DVec2 {
    fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<T: Coordinates + ?Sized> Coordinates for &T {
    fn xy(&self) -> (f64, f64) {
        (**self).xy()
    }
}

/// Reads the pair of an operand, rejecting NaN components.
pub(crate) fn checked_other<C: Coordinates + ?Sized>(other: &C) -> VectorResult<(f64, f64)> {
    let (x, y) = other.xy();
    if x.is_nan() || y.is_nan() {
        return Err(VectorError::other());
    }
    Ok((x, y))
}
