//! Compressor configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_comp_max() -> f64 {
    f64::INFINITY
}

const fn default_comp_min() -> f64 {
    0.0
}

/// Swinging door parameters
///
/// All fields are fixed once a `Compressor` is built from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Half-width of the allowed deviation band
    pub comp_dev: f64,
    /// Longest time span allowed without an archived point
    #[serde(default = "default_comp_max")]
    pub comp_max: f64,
    /// Shortest time after an archived point before a new point is considered
    #[serde(default = "default_comp_min")]
    pub comp_min: f64,
}

impl CompressorConfig {
    /// Config with the given deviation, no maximum gap and no minimum gap
    #[inline]
    #[must_use]
    pub const fn new(comp_dev: f64) -> Self {
        Self {
            comp_dev,
            comp_max: default_comp_max(),
            comp_min: default_comp_min(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_max_gap(mut self, comp_max: f64) -> Self {
        self.comp_max = comp_max;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_min_gap(mut self, comp_min: f64) -> Self {
        self.comp_min = comp_min;
        self
    }

    /// Check parameter ranges
    ///
    /// # Errors
    /// - `InvalidDeviation` unless `comp_dev` is finite and > 0
    /// - `NegativeMinGap` unless `comp_min >= 0`
    /// - `InvalidGapRange` unless `comp_min < comp_max`
    ///
    /// NaN fails every check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.comp_dev > 0.0 && self.comp_dev.is_finite()) {
            return Err(ConfigError::InvalidDeviation { comp_dev: self.comp_dev });
        }
        if !(self.comp_min >= 0.0) {
            return Err(ConfigError::NegativeMinGap { comp_min: self.comp_min });
        }
        if !(self.comp_min < self.comp_max) {
            return Err(ConfigError::InvalidGapRange {
                comp_min: self.comp_min,
                comp_max: self.comp_max,
            });
        }
        Ok(())
    }
}
