//! Numeric-like inputs.
//!
//! Values that can be turned into a number at the API boundary. Strings are
//! parsed rather than implicitly coerced; anything that does not yield a
//! number is rejected.

use crate::error::{VectorError, VectorResult};

/// A value that can be read as an `f64`.
///
/// # Examples
/// ```
/// use vector2::NumericInput;
/// assert_eq!(" 2.5 ".to_number().unwrap(), 2.5);
/// assert_eq!(3u8.to_number().unwrap(), 3.0);
/// assert!("abc".to_number().is_err());
/// ```
pub trait NumericInput {
    /// Reads the value as a number, failing with `InvalidArgument` when it is
    /// not one.
    fn to_number(&self) -> VectorResult<f64>;
}

impl NumericInput for f64 {
    fn to_number(&self) -> VectorResult<f64> {
        if self.is_nan() {
            return Err(not_a_number());
        }
        Ok(*self)
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> VectorResult<f64> {
        f64::from(*self).to_number()
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn to_number(&self) -> VectorResult<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl NumericInput for str {
    fn to_number(&self) -> VectorResult<f64> {
        parse_number(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> VectorResult<f64> {
        parse_number(self)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> VectorResult<f64> {
        (**self).to_number()
    }
}

/// Parses decimal text into a number.
///
/// Surrounding whitespace is ignored. Empty text, unparsable text and the
/// literal `NaN` are all rejected.
///
/// # Examples
/// ```
/// use vector2::parse_number;
/// assert_eq!(parse_number("-1e3").unwrap(), -1000.0);
/// assert!(parse_number("").is_err());
/// assert!(parse_number("NaN").is_err());
/// ```
pub fn parse_number(text: &str) -> VectorResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| not_a_number())?
        .to_number()
}

fn not_a_number() -> VectorError {
    VectorError::InvalidArgument("value is not a number.".to_string())
}
