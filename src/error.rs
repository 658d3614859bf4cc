//! Error types for swingdoor configuration and compression.

use thiserror::Error;

use crate::point::Point;

/// Error returned when a compressor configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Deviation half-width must be a finite number greater than zero
    #[error("compression deviation {comp_dev} must be finite and greater than zero")]
    InvalidDeviation { comp_dev: f64 },
    /// Minimum gap must be a non-negative number
    #[error("minimum gap {comp_min} must be zero or greater")]
    NegativeMinGap { comp_min: f64 },
    /// Minimum gap must be strictly below the maximum gap
    #[error("minimum gap {comp_min} must be less than maximum gap {comp_max}")]
    InvalidGapRange { comp_min: f64, comp_max: f64 },
}

/// Error returned when a point cannot be processed
///
/// A failed call leaves the compressor exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompressError {
    /// Point time is not strictly after the previously accepted point
    #[error(
        "point at t={} (value {}) is not after previous point at t={} (value {})",
        .point.time, .point.value, .previous.time, .previous.value
    )]
    NonMonotonicInput { point: Point, previous: Point },
    /// Point time or value is NaN or infinite
    #[error("point has non-finite coordinates: t={}, value={}", .point.time, .point.value)]
    NonFinitePoint { point: Point },
    /// Cone slope through the snapshot overflows (time gap too small or values too far apart)
    #[error(
        "cone from t={} (value {}) through t={} (value {}) has a non-finite slope",
        .anchor.time, .anchor.value, .snapshot.time, .snapshot.value
    )]
    DegenerateCone { anchor: Point, snapshot: Point },
    /// Batch compression was given no points
    #[error("no points to compress")]
    EmptyInput,
}

/// Any error from the one-shot [`compress`](crate::compress) helper
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Compress(#[from] CompressError),
}
