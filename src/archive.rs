//! Append-only archive of retained points.
//!
//! The archive is the compressed signal: joining consecutive archived points
//! with straight lines reconstructs the original within the compression
//! deviation.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Ordered log of archived points
///
/// Points are only ever appended. Nothing in the crate removes or rewrites
/// an archived point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    points: Vec<Point>,
}

impl Archive {
    /// Create an empty archive
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point to the end of the log
    #[inline]
    pub fn dump(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Most recently archived point, `None` while the archive is empty
    #[inline]
    #[must_use]
    pub fn last_archived(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn first_archived(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Archived points in archive order
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Time coordinates of the archived points, in archive order
    #[must_use]
    pub fn time_stamps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    /// Signal values of the archived points, in archive order
    #[must_use]
    pub fn signal_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Reconstruct the signal at time `t` by linear interpolation
    ///
    /// Returns the archived value when `t` hits an archived point exactly, and
    /// `None` when `t` lies outside the archived time range (or is NaN).
    #[must_use]
    pub fn interpolate(&self, t: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if !(t >= first.time && t <= last.time) {
            return None;
        }

        // First archived point strictly after t
        let idx = self.points.partition_point(|p| p.time <= t);
        if idx == 0 {
            return None;
        }
        let a = self.points[idx - 1];
        if a.time == t || idx == self.points.len() {
            return Some(a.value);
        }
        let b = self.points[idx];
        let slope = (b.value - a.value) / (b.time - a.time);
        Some(slope * (t - a.time) + a.value)
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
