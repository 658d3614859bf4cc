//! Trace hooks into the compression decision process.
//!
//! An `Observer` attached to a `Compressor` is told about every decision the
//! engine takes, in the order it takes them. This is enough to animate the
//! swinging door (tested points, archived points, the cone at each step)
//! without touching the decision logic.

use serde::{Deserialize, Serialize};

use crate::cone::Cone;
use crate::point::Point;

/// Why a point was archived directly (rather than as a snapshot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchiveReason {
    /// First point of the stream
    Bootstrap,
    /// Caller asked for the point to be archived
    Forced,
    /// Maximum gap since the last archived point was reached
    MaxGap,
}

/// Receiver of per-step compression events
///
/// Every method has an empty default, so implementors only override what
/// they need.
pub trait Observer {
    /// A point passed validation and is about to be evaluated
    fn point_tested(&mut self, _point: &Point) {}

    /// The incoming point itself was archived
    fn point_archived(&mut self, _point: &Point, _reason: ArchiveReason) {}

    /// The previous snapshot was archived because the incoming point left the cone
    fn snapshot_archived(&mut self, _snapshot: &Point) {}

    /// The point arrived within the minimum gap and was dropped
    fn point_ignored(&mut self, _point: &Point) {}

    /// The cone was recomputed from the current snapshot
    fn cone_updated(&mut self, _cone: &Cone) {}

    /// Both cone bounds were dropped because the anchor moved
    fn cone_reset(&mut self) {}
}

/// Observer that does nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn point_tested(&mut self, point: &Point) {
        (**self).point_tested(point);
    }

    fn point_archived(&mut self, point: &Point, reason: ArchiveReason) {
        (**self).point_archived(point, reason);
    }

    fn snapshot_archived(&mut self, snapshot: &Point) {
        (**self).snapshot_archived(snapshot);
    }

    fn point_ignored(&mut self, point: &Point) {
        (**self).point_ignored(point);
    }

    fn cone_updated(&mut self, cone: &Cone) {
        (**self).cone_updated(cone);
    }

    fn cone_reset(&mut self) {
        (**self).cone_reset();
    }
}

/// One recorded event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    Tested(Point),
    Archived(Point, ArchiveReason),
    SnapshotArchived(Point),
    Ignored(Point),
    ConeUpdated(Cone),
    ConeReset,
}

/// Observer that records every event in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the trace empty
    pub fn drain(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for Trace {
    fn point_tested(&mut self, point: &Point) {
        self.events.push(TraceEvent::Tested(*point));
    }

    fn point_archived(&mut self, point: &Point, reason: ArchiveReason) {
        self.events.push(TraceEvent::Archived(*point, reason));
    }

    fn snapshot_archived(&mut self, snapshot: &Point) {
        self.events.push(TraceEvent::SnapshotArchived(*snapshot));
    }

    fn point_ignored(&mut self, point: &Point) {
        self.events.push(TraceEvent::Ignored(*point));
    }

    fn cone_updated(&mut self, cone: &Cone) {
        self.events.push(TraceEvent::ConeUpdated(*cone));
    }

    fn cone_reset(&mut self) {
        self.events.push(TraceEvent::ConeReset);
    }
}
