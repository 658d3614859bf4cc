//! Swinging door state: the pending snapshot and the compression cone.

use crate::cone::{Cone, Line};
use crate::error::CompressError;
use crate::point::Point;

/// Snapshot and cone tracked between two archived points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompressionState {
    /// Last point seen but not yet committed to the archive
    pub(crate) snapshot: Option<Point>,
    cone: Cone,
}

impl CompressionState {
    /// Empty snapshot, unconstrained cone
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { snapshot: None, cone: Cone::unbounded() }
    }

    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<Point> {
        self.snapshot
    }

    #[inline]
    #[must_use]
    pub fn cone(&self) -> &Cone {
        &self.cone
    }

    /// Drop both bounds (`f_max ≡ +∞`, `f_min ≡ -∞`)
    #[inline]
    pub fn reset_cone(&mut self) {
        self.cone.reset();
    }

    /// Fold `snapshot` into the cone anchored at `anchor`
    ///
    /// Candidate bounds are the lines from `anchor` through
    /// `snapshot.value ± comp_dev` at `snapshot.time`. Each one replaces the
    /// stored bound only when it is tighter at `snapshot.time`.
    ///
    /// # Errors
    /// - `NonMonotonicInput` if `snapshot` is not strictly after `anchor`
    /// - `DegenerateCone` if either candidate slope overflows to ±∞
    ///
    /// The cone is left untouched on error.
    pub fn update_cone(&mut self, anchor: Point, snapshot: Point, comp_dev: f64) -> Result<(), CompressError> {
        if !(snapshot.time > anchor.time) {
            return Err(CompressError::NonMonotonicInput { point: snapshot, previous: anchor });
        }
        let upper = Line::through(anchor, snapshot.time, snapshot.value + comp_dev);
        let lower = Line::through(anchor, snapshot.time, snapshot.value - comp_dev);
        if !(upper.slope.is_finite() && lower.slope.is_finite()) {
            return Err(CompressError::DegenerateCone { anchor, snapshot });
        }
        self.cone.tighten(upper, lower, snapshot.time);
        Ok(())
    }
}
