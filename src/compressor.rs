//! Swinging door decision engine.

use tracing::{debug, trace};

use crate::archive::Archive;
use crate::config::CompressorConfig;
use crate::error::{CompressError, ConfigError, Error};
use crate::observer::{ArchiveReason, NoopObserver, Observer};
use crate::point::Point;
use crate::state::CompressionState;

/// Swinging door compressor for a single signal
///
/// Feed points in strictly increasing time order through
/// [`compression_test`](Self::compression_test); the retained points
/// accumulate in the [`Archive`]. Each instance owns its state exclusively,
/// so compressing several signals means one compressor per signal.
#[derive(Debug, Clone)]
pub struct Compressor<O: Observer = NoopObserver> {
    config: CompressorConfig,
    state: CompressionState,
    archive: Archive,
    /// Last point accepted by `compression_test`, ignored points included
    last_seen: Option<Point>,
    tested: usize,
    observer: O,
}

impl Compressor<NoopObserver> {
    /// Create a compressor without an observer
    ///
    /// # Errors
    /// Returns the validation error if `config` is out of range.
    pub fn new(config: CompressorConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: Observer> Compressor<O> {
    /// Create a compressor that reports every decision to `observer`
    ///
    /// # Errors
    /// Returns the validation error if `config` is out of range.
    pub fn with_observer(config: CompressorConfig, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            comp_dev = config.comp_dev,
            comp_max = config.comp_max,
            comp_min = config.comp_min,
            "swinging door compressor created"
        );
        Ok(Self {
            config,
            state: CompressionState::new(),
            archive: Archive::new(),
            last_seen: None,
            tested: 0,
            observer,
        })
    }

    /// Run the swinging door test on the next point of the stream
    ///
    /// With `force_dump` the point is archived whatever the cone and gap
    /// state (use it to flush the last point of a stream).
    ///
    /// # Errors
    /// - `NonFinitePoint` if time or value is NaN or infinite
    /// - `NonMonotonicInput` if `point.time` is not after the previous point
    /// - `DegenerateCone` if the cone through the current snapshot overflows;
    ///   flushing the point with `force_dump` starts a fresh segment
    ///
    /// On error nothing is archived and the state is unchanged.
    pub fn compression_test(&mut self, point: Point, force_dump: bool) -> Result<(), CompressError> {
        self.check_order(point)?;
        self.observer.point_tested(&point);

        let mut dump_point = None;
        let mut dump_snapshot = None;
        let mut ignore_point = false;

        match (self.archive.last_archived(), self.state.snapshot) {
            (None, _) => dump_point = Some(ArchiveReason::Bootstrap),
            (Some(_), _) if force_dump => dump_point = Some(ArchiveReason::Forced),
            (Some(last), Some(snapshot)) if last != snapshot => {
                let gap = point.time - last.time;
                if gap >= self.config.comp_max {
                    dump_point = Some(ArchiveReason::MaxGap);
                } else if gap < self.config.comp_min {
                    ignore_point = true;
                } else if !self.cone_test(last, snapshot, point)? {
                    dump_snapshot = Some(snapshot);
                }
            }
            // Snapshot is the last archived point: the cone has nothing to
            // anchor on yet.
            _ => {}
        }

        if let Some(reason) = dump_point {
            trace!(time = point.time, value = point.value, ?reason, "archiving point");
            self.archive.dump(point);
            self.observer.point_archived(&point, reason);
            // New anchor, the old cone no longer applies
            self.reset_cone();
        }

        if let Some(snapshot) = dump_snapshot {
            trace!(time = snapshot.time, value = snapshot.value, "archiving snapshot");
            self.archive.dump(snapshot);
            self.observer.snapshot_archived(&snapshot);
        }

        if ignore_point {
            trace!(time = point.time, value = point.value, "point within minimum gap, ignored");
            self.observer.point_ignored(&point);
        } else {
            self.state.snapshot = Some(point);
        }

        self.last_seen = Some(point);
        self.tested += 1;
        Ok(())
    }

    /// Shorthand for `compression_test(point, false)`
    ///
    /// # Errors
    /// See [`compression_test`](Self::compression_test).
    #[inline]
    pub fn push(&mut self, point: Point) -> Result<(), CompressError> {
        self.compression_test(point, false)
    }

    /// Shorthand for `compression_test(point, true)`
    ///
    /// # Errors
    /// See [`compression_test`](Self::compression_test).
    #[inline]
    pub fn flush(&mut self, point: Point) -> Result<(), CompressError> {
        self.compression_test(point, true)
    }

    /// Feed a batch of points, forcing the last one into the archive
    ///
    /// Stops at the first rejected point; points before it stay processed.
    ///
    /// # Errors
    /// - `EmptyInput` if `points` is empty
    /// - any error from [`compression_test`](Self::compression_test)
    pub fn compress_all(&mut self, points: &[Point]) -> Result<(), CompressError> {
        let Some((last, rest)) = points.split_last() else {
            return Err(CompressError::EmptyInput);
        };
        for &point in rest {
            self.push(point)?;
        }
        self.flush(*last)
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &CompressionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Number of points accepted so far, ignored points included
    #[inline]
    #[must_use]
    pub fn tested_count(&self) -> usize {
        self.tested
    }

    /// Input points per archived point, `None` before the first point
    #[must_use]
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.archive.is_empty() {
            return None;
        }
        Some(self.tested as f64 / self.archive.len() as f64)
    }

    #[must_use]
    pub fn into_archive(self) -> Archive {
        self.archive
    }

    #[must_use]
    pub fn into_parts(self) -> (Archive, O) {
        (self.archive, self.observer)
    }

    /// Reject points that would corrupt the cone math
    fn check_order(&self, point: Point) -> Result<(), CompressError> {
        if !point.is_finite() {
            return Err(CompressError::NonFinitePoint { point });
        }
        match self.last_seen {
            Some(previous) if !(point.time > previous.time) => {
                Err(CompressError::NonMonotonicInput { point, previous })
            }
            _ => Ok(()),
        }
    }

    /// Tighten the cone with the current snapshot and check the new point
    ///
    /// Returns false (and resets the cone) when the point is on or outside
    /// either bound, meaning the snapshot has to be archived.
    fn cone_test(&mut self, last: Point, snapshot: Point, point: Point) -> Result<bool, CompressError> {
        self.state.update_cone(last, snapshot, self.config.comp_dev)?;
        self.observer.cone_updated(self.state.cone());

        if self.state.cone().contains(&point) {
            return Ok(true);
        }
        trace!(
            time = point.time,
            value = point.value,
            f_max = self.state.cone().f_max(point.time),
            f_min = self.state.cone().f_min(point.time),
            "point outside cone"
        );
        self.reset_cone();
        Ok(false)
    }

    fn reset_cone(&mut self) {
        if self.state.cone().is_unbounded() {
            return;
        }
        self.state.reset_cone();
        self.observer.cone_reset();
    }
}

/// Compress a whole signal in one go
///
/// The last point is always archived.
///
/// # Errors
/// Returns a configuration error for an invalid `config`, or the first
/// point error encountered.
///
/// # Example
/// ```
/// use swingdoor::{compress, CompressorConfig, Point};
///
/// let points: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i), 1.0)).collect();
/// let archive = compress(&points, CompressorConfig::new(0.1)).unwrap();
/// assert_eq!(archive.time_stamps(), vec![0.0, 9.0]);
/// ```
pub fn compress(points: &[Point], config: CompressorConfig) -> Result<Archive, Error> {
    let mut compressor = Compressor::new(config)?;
    compressor.compress_all(points)?;
    Ok(compressor.into_archive())
}
