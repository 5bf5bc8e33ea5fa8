//! WASM-facing entry points for the Vector2 library.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`, where the Rust `JsVector2` is exported as the `Vector2`
//! class. Native tests interact with the `*_internal` helpers and the plain
//! accessors to avoid depending on a JS host.
//!
//! ```
//! use vector2_wasm::{construct_internal, JsNumeric};
//! let v = construct_internal(&JsNumeric::Text("3".into()), &JsNumeric::Number(4.0)).unwrap();
//! assert_eq!(v.length().unwrap(), 5.0);
//! ```

use config::constants::DEFAULT_NORMALIZE_SCALAR;
use vector2::{Vector2, VectorError, VectorResult};
use wasm_bindgen::prelude::*;

mod coerce;

pub use coerce::{coerce, coerce_required, read_coordinates, JsNumeric};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "vector2-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Converts a library error into a thrown JavaScript `TypeError`.
fn to_js_error(err: VectorError) -> JsValue {
    js_sys::TypeError::new(err.message()).into()
}

/// Host-only helper that builds a vector from classified constructor
/// arguments. Missing arguments default to `0`.
///
/// # Examples
/// ```
/// use vector2_wasm::{construct_internal, JsNumeric};
/// let v = construct_internal(&JsNumeric::Number(1.0), &JsNumeric::Missing).unwrap();
/// assert_eq!((v.x, v.y), (1.0, 0.0));
/// assert!(construct_internal(&JsNumeric::Other, &JsNumeric::Missing).is_err());
/// ```
pub fn construct_internal(x: &JsNumeric, y: &JsNumeric) -> VectorResult<Vector2> {
    Vector2::from_optional(coerce(x), coerce(y))
}

/// Host-only helper behind `angleToVector2`.
pub fn angle_to_vector2_internal(angle: &JsNumeric) -> VectorResult<Vector2> {
    vector2::angle_to_vector2(coerce_required(angle))
}

/// Host-only helper behind `Vector2.prototype.normalize`; any falsy scalar
/// means unit length.
pub fn normalize_internal(vector: &Vector2, scalar: &JsNumeric) -> VectorResult<Vector2> {
    let scalar = if scalar.is_falsy() {
        DEFAULT_NORMALIZE_SCALAR
    } else {
        coerce_required(scalar)
    };
    vector.normalize_to(scalar)
}

/// Given an angle in degrees, returns a `Vector2` pointing that way.
///
/// # Errors
/// Throws a `TypeError` when the angle is not numerical.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const left = angleToVector2(180);
/// // console.log(left.toString()); // "Vector2(-1, 0)"
/// ```
#[wasm_bindgen(js_name = angleToVector2)]
pub fn angle_to_vector2(angle: JsValue) -> Result<JsVector2, JsValue> {
    angle_to_vector2_internal(&JsNumeric::from_js(&angle))
        .map(JsVector2::from)
        .map_err(to_js_error)
}

/// Vector2 class exported to JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const a = new Vector2(1, 1);
/// // a.add({ x: 2, y: 3 });
/// // console.log(a.length());
/// ```
#[wasm_bindgen(js_name = Vector2)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsVector2 {
    inner: Vector2,
}

#[wasm_bindgen(js_class = Vector2)]
impl JsVector2 {
    /// Creates a vector from numbers or numeric strings; omitted values are `0`.
    #[wasm_bindgen(constructor)]
    pub fn new(x: JsValue, y: JsValue) -> Result<JsVector2, JsValue> {
        construct_internal(&JsNumeric::from_js(&x), &JsNumeric::from_js(&y))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Horizontal component.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Sets the horizontal component without validation.
    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, x: f64) {
        self.inner.x = x;
    }

    /// Vertical component.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Sets the vertical component without validation.
    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, y: f64) {
        self.inner.y = y;
    }

    /// Exact equality with any object exposing `x` and `y`.
    pub fn compare(&self, other: JsValue) -> Result<bool, JsValue> {
        self.inner
            .compare(&read_coordinates(&other))
            .map_err(to_js_error)
    }

    /// Euclidean length.
    pub fn length(&self) -> Result<f64, JsValue> {
        self.inner.length().map_err(to_js_error)
    }

    /// Alias for `length`.
    pub fn magnitude(&self) -> Result<f64, JsValue> {
        self.inner.magnitude().map_err(to_js_error)
    }

    /// New vector with length `scalar` (default `1`).
    pub fn normalize(&self, scalar: JsValue) -> Result<JsVector2, JsValue> {
        normalize_internal(&self.inner, &JsNumeric::from_js(&scalar))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Componentwise sum as a new vector.
    #[wasm_bindgen(js_name = addNew)]
    pub fn add_new(&self, other: JsValue) -> Result<JsVector2, JsValue> {
        self.inner
            .add_new(&read_coordinates(&other))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Adds `other` in place.
    pub fn add(&mut self, other: JsValue) -> Result<(), JsValue> {
        self.inner
            .add(&read_coordinates(&other))
            .map_err(to_js_error)
    }

    /// Componentwise difference as a new vector.
    #[wasm_bindgen(js_name = subNew)]
    pub fn sub_new(&self, other: JsValue) -> Result<JsVector2, JsValue> {
        self.inner
            .sub_new(&read_coordinates(&other))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Subtracts `other` in place.
    pub fn sub(&mut self, other: JsValue) -> Result<(), JsValue> {
        self.inner
            .sub(&read_coordinates(&other))
            .map_err(to_js_error)
    }

    /// Scaled copy.
    #[wasm_bindgen(js_name = mulNew)]
    pub fn mul_new(&self, scalar: JsValue) -> Result<JsVector2, JsValue> {
        self.inner
            .mul_new(coerce_required(&JsNumeric::from_js(&scalar)))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Scales in place.
    pub fn mul(&mut self, scalar: JsValue) -> Result<(), JsValue> {
        self.inner
            .mul(coerce_required(&JsNumeric::from_js(&scalar)))
            .map_err(to_js_error)
    }

    /// Divided copy; rejects a zero divisor.
    #[wasm_bindgen(js_name = divNew)]
    pub fn div_new(&self, divisor: JsValue) -> Result<JsVector2, JsValue> {
        self.inner
            .div_new(coerce_required(&JsNumeric::from_js(&divisor)))
            .map(JsVector2::from)
            .map_err(to_js_error)
    }

    /// Divides in place; rejects a zero divisor.
    pub fn div(&mut self, divisor: JsValue) -> Result<(), JsValue> {
        self.inner
            .div(coerce_required(&JsNumeric::from_js(&divisor)))
            .map_err(to_js_error)
    }

    /// Angle in radians.
    #[wasm_bindgen(js_name = vectorToAngleRadians)]
    pub fn vector_to_angle_radians(&self) -> Result<f64, JsValue> {
        self.inner.vector_to_angle_radians().map_err(to_js_error)
    }

    /// Angle in degrees.
    #[wasm_bindgen(js_name = vectorToAngleDegrees)]
    pub fn vector_to_angle_degrees(&self) -> Result<f64, JsValue> {
        self.inner.vector_to_angle_degrees().map_err(to_js_error)
    }

    /// Distance to any object exposing `x` and `y`.
    pub fn distance(&self, other: JsValue) -> Result<f64, JsValue> {
        self.inner
            .distance(&read_coordinates(&other))
            .map_err(to_js_error)
    }

    /// `Vector2(<x>, <y>)`.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }

    /// Converts this vector to a plain `{x, y}` JavaScript object.
    ///
    /// Useful for posting data between a worker and the main thread, as
    /// wasm-bindgen wrappers cannot be transferred.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("x"), &JsValue::from_f64(self.inner.x))?;
        Reflect::set(&obj, &JsValue::from_str("y"), &JsValue::from_f64(self.inner.y))?;
        Ok(obj.into())
    }
}

impl JsVector2 {
    /// The wrapped library value.
    pub fn inner(&self) -> Vector2 {
        self.inner
    }
}

impl From<Vector2> for JsVector2 {
    fn from(inner: Vector2) -> Self {
        Self { inner }
    }
}

impl From<JsVector2> for Vector2 {
    fn from(value: JsVector2) -> Self {
        value.inner
    }
}
