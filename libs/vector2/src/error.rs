//! # Error Types
//!
//! Error types for vector operations. All errors are explicit and returned
//! to the caller.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when an input is not a number
//! - Nothing is logged or swallowed
//! - Overflow to infinity is not an error

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2::{Vector2, VectorError};
///
/// match Vector2::new(f64::NAN, 1.0) {
///     Ok(v) => println!("built {v}"),
///     Err(VectorError::InvalidArgument(msg)) => eprintln!("rejected: {msg}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A required numeric input was not a number, or a divisor was zero.
    ///
    /// Contains a description of the offending input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl VectorError {
    /// The description of the offending input, without the variant prefix.
    ///
    /// # Examples
    /// ```
    /// use vector2::Vector2;
    /// let err = Vector2::new(f64::NAN, 0.0).unwrap_err();
    /// assert_eq!(err.message(), "Both X and Y values for Vector2 must be numbers.");
    /// ```
    pub fn message(&self) -> &str {
        match self {
            VectorError::InvalidArgument(msg) => msg,
        }
    }

    pub(crate) fn components() -> Self {
        Self::InvalidArgument("Both X and Y values for Vector2 must be numbers.".to_string())
    }

    pub(crate) fn receiver() -> Self {
        Self::InvalidArgument("Vector2 X and Y must be numbers.".to_string())
    }

    pub(crate) fn other() -> Self {
        Self::InvalidArgument(
            "other vector must be a Vector2 or have numerical X and Y components.".to_string(),
        )
    }

    pub(crate) fn scalar() -> Self {
        Self::InvalidArgument("scalar must be numerical.".to_string())
    }

    pub(crate) fn divisor() -> Self {
        Self::InvalidArgument("divisor must be numerical and non-zero.".to_string())
    }

    pub(crate) fn angle() -> Self {
        Self::InvalidArgument("angle must be numerical.".to_string())
    }
}

impl From<ConfigError> for VectorError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use vector2::{Vector2, VectorResult};
///
/// fn halfway(a: Vector2, b: Vector2) -> VectorResult<Vector2> {
///     a.add_new(&b)?.div_new(2.0)
/// }
/// # assert_eq!(halfway(Vector2::ZERO, Vector2::new(2.0, 4.0).unwrap()).unwrap(), Vector2::new(1.0, 2.0).unwrap());
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
