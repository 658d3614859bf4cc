//! Point struct for time-stamped signal samples.

use serde::{Deserialize, Serialize};

/// A single sample of a scalar signal
///
/// Equality is exact field-wise floating point comparison. The decision
/// engine relies on this to detect that the snapshot is the point it just
/// archived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Sample time (any unit, must increase strictly along a stream)
    pub time: f64,
    /// Signal value
    pub value: f64,
}

impl Point {
    /// Sample at `time` with `value`
    #[inline]
    #[must_use]
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// Both coordinates are finite numbers
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}
