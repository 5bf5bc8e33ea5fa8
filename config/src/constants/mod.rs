//! Centralized configuration values shared across the Vector2 workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// CONSTRUCTION DEFAULTS
// =============================================================================

/// Value used for a vector component that was not supplied.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COMPONENT;
/// let y: Option<f64> = None;
/// assert_eq!(y.unwrap_or(DEFAULT_COMPONENT), 0.0);
/// ```
pub const DEFAULT_COMPONENT: f64 = 0.0;

/// Target length used by normalization when no scalar is requested.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_NORMALIZE_SCALAR;
/// assert_eq!(DEFAULT_NORMALIZE_SCALAR, 1.0);
/// ```
pub const DEFAULT_NORMALIZE_SCALAR: f64 = 1.0;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Degrees in half a turn, used for degree/radian conversion.
///
/// # Examples
/// ```
/// use config::constants::DEGREES_PER_HALF_TURN;
/// let radians = 90.0 * std::f64::consts::PI / DEGREES_PER_HALF_TURN;
/// assert!((radians - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub const DEGREES_PER_HALF_TURN: f64 = 180.0;

/// Number of decimals kept when an angle is turned into a vector.
///
/// # Examples
/// ```
/// use config::constants::ANGLE_ROUNDING_DECIMALS;
/// assert_eq!(ANGLE_ROUNDING_DECIMALS, 2);
/// ```
pub const ANGLE_ROUNDING_DECIMALS: u32 = 2;

/// Upper bound on configurable rounding decimals.
///
/// An `f64` carries roughly 15 significant decimal digits; asking for more
/// makes the scale factor meaningless.
///
/// # Examples
/// ```
/// use config::constants::{ANGLE_ROUNDING_DECIMALS, MAX_ROUNDING_DECIMALS};
/// assert!(ANGLE_ROUNDING_DECIMALS <= MAX_ROUNDING_DECIMALS);
/// ```
pub const MAX_ROUNDING_DECIMALS: u32 = 15;

// =============================================================================
// ROUNDING CONFIGURATION
// =============================================================================

/// Decimal rounding applied to the components produced from an angle.
///
/// # Examples
/// ```
/// use config::constants::RoundingConfig;
/// let config = RoundingConfig::default();
/// assert_eq!(config.scale(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingConfig {
    decimals: u32,
}

impl RoundingConfig {
    /// Builds a configuration keeping `decimals` digits after the point.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RoundingConfig;
    /// let cfg = RoundingConfig::new(3).expect("valid config");
    /// assert_eq!(cfg.round(0.12345), 0.123);
    /// assert!(RoundingConfig::new(16).is_err());
    /// ```
    pub fn new(decimals: u32) -> Result<Self, ConfigError> {
        if decimals > MAX_ROUNDING_DECIMALS {
            return Err(ConfigError::InvalidDecimals(decimals));
        }
        Ok(Self { decimals })
    }

    /// Number of decimals kept.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Power of ten the value is scaled by before rounding.
    pub fn scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }

    /// Rounds `value` to the configured number of decimals, half away from zero.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RoundingConfig;
    /// let cfg = RoundingConfig::default();
    /// assert_eq!(cfg.round(-0.996), -1.0);
    /// assert_eq!(cfg.round(0.004), 0.0);
    /// ```
    pub fn round(&self, value: f64) -> f64 {
        let scale = self.scale();
        (value * scale).round() / scale
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            decimals: ANGLE_ROUNDING_DECIMALS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when more decimals are requested than an `f64` can represent.
    InvalidDecimals(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDecimals(value) => {
                write!(f, "decimals must be <= {MAX_ROUNDING_DECIMALS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
