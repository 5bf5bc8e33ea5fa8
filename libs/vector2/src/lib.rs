//! Two-dimensional vector value type.
//!
//! `Vector2` validates its components on construction and re-checks them on
//! every operation that reads them, returning [`VectorError::InvalidArgument`]
//! instead of producing NaN. Arithmetic is offered both in place (`add`,
//! `sub`, `mul`, `div`) and as value-returning variants (`add_new`, ...).
//!
//! ```
//! use vector2::{angle_to_vector2, Vector2};
//!
//! let mut a = Vector2::new(10.0, 5.0).unwrap();
//! let b = Vector2::new(5.0, 10.0).unwrap();
//! assert_eq!(a.distance(&b).unwrap(), 50f64.sqrt());
//!
//! a.sub(&b).unwrap();
//! assert_eq!(a.to_string(), "Vector2(5, -5)");
//!
//! let left = angle_to_vector2(180.0).unwrap();
//! assert!(left.compare(&(-1.0, 0.0)).unwrap());
//! ```

pub mod angle;
pub mod coordinates;
pub mod error;
pub mod numeric;
pub mod vector;

pub use angle::{angle_to_vector2, angle_to_vector2_with};
pub use coordinates::Coordinates;
pub use error::{VectorError, VectorResult};
pub use numeric::{parse_number, NumericInput};
pub use vector::Vector2;
