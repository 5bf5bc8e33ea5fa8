//! # Config Crate
//!
//! Centralized configuration constants for the Vector2 workspace.
//! Default component values, normalization defaults and the rounding
//! precision used when turning angles into vectors all live here so the
//! library and its browser bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ANGLE_ROUNDING_DECIMALS, DEFAULT_COMPONENT, RoundingConfig};
//!
//! // Absent components fall back to the default
//! let x: Option<f64> = None;
//! assert_eq!(x.unwrap_or(DEFAULT_COMPONENT), 0.0);
//!
//! // Angle conversion rounds to two decimals unless configured otherwise
//! let rounding = RoundingConfig::default();
//! assert_eq!(rounding.decimals(), ANGLE_ROUNDING_DECIMALS);
//! assert_eq!(rounding.round(0.123), 0.12);
//! ```
//!
//! ## Design Principles
//!
//! - Defaults shared by `vector2` and `vector2-wasm` are declared here and
//!   nowhere else, so the JS binding cannot drift from the library.
//! - Rounding precision is only reachable through [`constants::RoundingConfig`],
//!   which rejects more than [`constants::MAX_ROUNDING_DECIMALS`] decimals.

pub mod constants;

#[cfg(test)]
mod tests;
