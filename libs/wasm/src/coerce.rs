//! Coercion of JavaScript arguments into numbers.
//!
//! JavaScript callers pass numbers, numeric strings, `undefined` or arbitrary
//! objects. Arguments are first classified into [`JsNumeric`] and then turned
//! into an `f64`; anything that is not a number becomes NaN so the core
//! library reports the error with the message for that operand.

use js_sys::Reflect;
use vector2::parse_number;
use wasm_bindgen::prelude::*;

/// A JavaScript argument classified for numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum JsNumeric {
    /// `undefined` or `null`.
    Missing,
    /// A JavaScript number.
    Number(f64),
    /// A string, parsed as decimal text.
    Text(String),
    /// A boolean; never numeric, but `false` is falsy.
    Bool(bool),
    /// Any other value, such as an object or a function.
    Other,
}

impl JsNumeric {
    /// Classifies a JavaScript value.
    pub fn from_js(value: &JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            JsNumeric::Missing
        } else if let Some(number) = value.as_f64() {
            JsNumeric::Number(number)
        } else if let Some(text) = value.as_string() {
            JsNumeric::Text(text)
        } else if let Some(flag) = value.as_bool() {
            JsNumeric::Bool(flag)
        } else {
            JsNumeric::Other
        }
    }

    /// Whether JavaScript would treat the value as falsy: `undefined`,
    /// `null`, `false`, `0`, `NaN` or the empty string.
    ///
    /// # Examples
    /// ```
    /// use vector2_wasm::JsNumeric;
    /// assert!(JsNumeric::Text(String::new()).is_falsy());
    /// assert!(!JsNumeric::Text(" ".into()).is_falsy());
    /// ```
    pub fn is_falsy(&self) -> bool {
        match self {
            JsNumeric::Missing => true,
            JsNumeric::Number(number) => *number == 0.0 || number.is_nan(),
            JsNumeric::Text(text) => text.is_empty(),
            JsNumeric::Bool(flag) => !flag,
            JsNumeric::Other => false,
        }
    }
}

/// Turns a classified argument into a number.
///
/// Returns `None` when the argument is missing and NaN when it is present
/// but not numeric.
///
/// # Examples
/// ```
/// use vector2_wasm::{coerce, JsNumeric};
/// assert_eq!(coerce(&JsNumeric::Text("2.5".into())), Some(2.5));
/// assert_eq!(coerce(&JsNumeric::Missing), None);
/// assert!(coerce(&JsNumeric::Other).unwrap().is_nan());
/// ```
pub fn coerce(arg: &JsNumeric) -> Option<f64> {
    match arg {
        JsNumeric::Missing => None,
        JsNumeric::Number(number) => Some(*number),
        JsNumeric::Text(text) => Some(parse_number(text).unwrap_or(f64::NAN)),
        JsNumeric::Bool(_) | JsNumeric::Other => Some(f64::NAN),
    }
}

/// Coerces a required argument; a missing value counts as not a number.
pub fn coerce_required(arg: &JsNumeric) -> f64 {
    coerce(arg).unwrap_or(f64::NAN)
}

/// Reads the `x`/`y` properties of any JavaScript object.
///
/// Works for `Vector2` instances (whose accessors live on the prototype) as
/// well as plain `{x, y}` objects. Unreadable or non-numeric properties come
/// back as NaN.
pub fn read_coordinates(value: &JsValue) -> (f64, f64) {
    (read_property(value, "x"), read_property(value, "y"))
}

fn read_property(value: &JsValue, name: &str) -> f64 {
    Reflect::get(value, &JsValue::from_str(name))
        .map(|prop| coerce_required(&JsNumeric::from_js(&prop)))
        .unwrap_or(f64::NAN)
}
