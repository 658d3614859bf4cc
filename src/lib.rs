//! `swingdoor` - Swinging door trending compression for time-stamped signals
//!
//! Historian and SCADA systems store sensor streams by keeping only the
//! samples needed to redraw the signal as straight line segments within a
//! fixed deviation band. The swinging door algorithm decides online, one
//! sample at a time, which samples must be archived.
//!
//! # Example
//! ```
//! use swingdoor::{Compressor, CompressorConfig, Point};
//!
//! let config = CompressorConfig::new(0.2);
//! let mut compressor = Compressor::new(config).unwrap();
//!
//! let n = 50;
//! for i in 0..n {
//!     let t = f64::from(i) * std::f64::consts::PI / 24.0;
//!     let point = Point::new(t, t.sin());
//!     // Flush the final sample so the archive ends where the signal ends
//!     compressor.compression_test(point, i == n - 1).unwrap();
//! }
//!
//! let archive = compressor.archive();
//! assert!(archive.len() < 50);
//! println!("ratio: x{:.1}", compressor.compression_ratio().unwrap());
//! ```
//!
//! # Algorithm
//!
//! The engine keeps three things between points:
//!
//! - the **archive**: every retained point, in order; its last element is the
//!   anchor of the current segment
//! - the **snapshot**: the most recent point seen but not archived
//! - the **cone**: two lines from the anchor. The upper one passes through
//!   `snapshot.value + comp_dev`, the lower one through
//!   `snapshot.value - comp_dev`, each kept only while it is the tightest
//!   seen since the anchor.
//!
//! For each incoming point, in order of precedence:
//!
//! | Condition | Action |
//! |-----------|--------|
//! | archive empty, or `force_dump` | archive the point |
//! | snapshot equals last archived | nothing (no cone to test against yet) |
//! | `t - t_last >= comp_max` | archive the point |
//! | `t - t_last < comp_min` | ignore the point (snapshot kept) |
//! | point strictly inside the tightened cone | nothing |
//! | otherwise | archive the snapshot, reset the cone |
//!
//! Except for ignored points, the incoming point then becomes the snapshot.
//! Every direct archive of the point also resets the cone since the anchor
//! moves.
//!
//! Reconstructing the signal by linear interpolation between archived points
//! stays within `comp_dev` of every sample that was folded into a cone.
//!
//! # Observing decisions
//!
//! [`Compressor::with_observer`] attaches an [`Observer`] that is told about
//! each step (point tested, archived, ignored, cone updated or reset). The
//! bundled [`Trace`] records them for later rendering.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

mod archive;
mod compressor;
mod cone;
mod config;
mod error;
mod observer;
mod point;
mod state;

#[cfg(test)]
mod tests;

// Re-export public API
pub use archive::Archive;
pub use compressor::{compress, Compressor};
pub use cone::{Cone, Line};
pub use config::CompressorConfig;
pub use error::{CompressError, ConfigError, Error};
pub use observer::{ArchiveReason, NoopObserver, Observer, Trace, TraceEvent};
pub use point::Point;
pub use state::CompressionState;
