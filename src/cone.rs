//! Compression cone: the pair of lines bounding where the next point may fall.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Affine function of time, `f(t) = slope * (t - anchor_time) + anchor_value`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub slope: f64,
    pub anchor_time: f64,
    pub anchor_value: f64,
}

impl Line {
    /// Line through `anchor` and `(through_time, through_value)`
    ///
    /// Caller must ensure `through_time != anchor.time`.
    #[inline]
    #[must_use]
    pub fn through(anchor: Point, through_time: f64, through_value: f64) -> Self {
        Self {
            slope: (through_value - anchor.value) / (through_time - anchor.time),
            anchor_time: anchor.time,
            anchor_value: anchor.value,
        }
    }

    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.slope * (t - self.anchor_time) + self.anchor_value
    }
}

/// Upper and lower bounding lines
///
/// A missing bound is unconstrained: the upper bound evaluates to +∞ and the
/// lower bound to -∞. Between two resets both bounds share the same anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    upper: Option<Line>,
    lower: Option<Line>,
}

impl Cone {
    /// Unconstrained cone
    #[inline]
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { upper: None, lower: None }
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::unbounded();
    }

    #[inline]
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none() && self.lower.is_none()
    }

    #[inline]
    #[must_use]
    pub fn upper(&self) -> Option<Line> {
        self.upper
    }

    #[inline]
    #[must_use]
    pub fn lower(&self) -> Option<Line> {
        self.lower
    }

    /// `f_max(t)`
    #[inline]
    #[must_use]
    pub fn f_max(&self, t: f64) -> f64 {
        self.upper.map_or(f64::INFINITY, |line| line.evaluate(t))
    }

    /// `f_min(t)`
    #[inline]
    #[must_use]
    pub fn f_min(&self, t: f64) -> f64 {
        self.lower.map_or(f64::NEG_INFINITY, |line| line.evaluate(t))
    }

    /// Value lies strictly between the bounds at time `t`
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        point.value < self.f_max(point.time) && point.value > self.f_min(point.time)
    }

    /// Fold candidate bounds in, keeping each one only if it is tighter at `t`
    ///
    /// The upper bound can only move down and the lower bound only up.
    /// Returns true when either bound changed.
    pub(crate) fn tighten(&mut self, upper: Line, lower: Line, t: f64) -> bool {
        let mut changed = false;
        if upper.evaluate(t) < self.f_max(t) {
            self.upper = Some(upper);
            changed = true;
        }
        if lower.evaluate(t) > self.f_min(t) {
            self.lower = Some(lower);
            changed = true;
        }
        changed
    }
}
