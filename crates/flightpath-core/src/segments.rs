//! Directed route legs and the cursor that consumes them over time.

use crate::models::Waypoint;
use crate::spatial::{bearing, destination, distance};
use serde::{Deserialize, Serialize};

/// Remaining time below this many minutes counts as a finished leg.
pub const CONSUME_EPSILON_MIN: f64 = 1e-9;

/// A great-circle leg between two consecutive waypoints.
///
/// Legs are immutable once built; consumption progress lives in [`SegmentQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Waypoint,
    pub end: Waypoint,
    /// Initial heading from `start` to `end`, degrees `[0, 360)`.
    pub bearing: f64,
    pub distance_km: f64,
    /// Minutes needed to fly the whole leg.
    pub total_time_min: f64,
}

impl Segment {
    pub fn new(start: Waypoint, end: Waypoint, speed_kmh: f64) -> Self {
        let distance_km = distance(&start, &end);
        Self {
            start,
            end,
            bearing: bearing(&start, &end),
            distance_km,
            total_time_min: distance_km / speed_kmh * 60.0,
        }
    }
}

/// Build one leg per consecutive waypoint pair. Fewer than two waypoints yields none.
pub fn build_segments(waypoints: &[Waypoint], speed_kmh: f64) -> Vec<Segment> {
    waypoints
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1], speed_kmh))
        .collect()
}

/// Unflown part of the leg under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Remainder {
    /// Where the aircraft currently is on this leg.
    pub start: Waypoint,
    pub remaining_time_min: f64,
}

/// Outcome of spending time on the head leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// The head leg was flown to its end; the cursor moved to the next leg.
    Completed { end: Waypoint, time_used_min: f64 },
    /// The head leg outlives the budget; the aircraft stopped mid-leg.
    Partial { position: Waypoint, time_used_min: f64 },
}

impl Advance {
    pub fn position(&self) -> Waypoint {
        match *self {
            Advance::Completed { end, .. } => end,
            Advance::Partial { position, .. } => position,
        }
    }

    pub fn time_used_min(&self) -> f64 {
        match *self {
            Advance::Completed { time_used_min, .. } | Advance::Partial { time_used_min, .. } => {
                time_used_min
            }
        }
    }
}

/// Ordered legs plus a cursor and the active remainder of the head leg.
#[derive(Debug, Clone)]
pub struct SegmentQueue {
    segments: Vec<Segment>,
    cursor: usize,
    active: Option<Remainder>,
    speed_kmh: f64,
}

impl SegmentQueue {
    pub fn new(segments: Vec<Segment>, speed_kmh: f64) -> Self {
        let active = segments.first().map(fresh_remainder);
        Self {
            segments,
            cursor: 0,
            active,
            speed_kmh,
        }
    }

    pub fn from_waypoints(waypoints: &[Waypoint], speed_kmh: f64) -> Self {
        Self::new(build_segments(waypoints, speed_kmh), speed_kmh)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// Legs not yet fully flown, the head included.
    pub fn remaining_legs(&self) -> usize {
        self.segments.len() - self.cursor
    }

    pub fn total_time_min(&self) -> f64 {
        self.segments.iter().map(|s| s.total_time_min).sum()
    }

    pub fn head(&self) -> Option<(&Segment, &Remainder)> {
        let remainder = self.active.as_ref()?;
        Some((&self.segments[self.cursor], remainder))
    }

    /// Spend up to `budget_min` minutes on the head leg.
    ///
    /// The head's original bearing is kept when it is split, so heading stays
    /// continuous along one leg. Returns `None` once every leg is flown.
    pub fn advance(&mut self, budget_min: f64) -> Option<Advance> {
        let remainder = self.active?;
        let segment = self.segments[self.cursor];
        let time_used_min = remainder.remaining_time_min.min(budget_min);
        let left = remainder.remaining_time_min - time_used_min;

        if left <= CONSUME_EPSILON_MIN {
            self.cursor += 1;
            self.active = self.segments.get(self.cursor).map(fresh_remainder);
            return Some(Advance::Completed {
                end: segment.end,
                time_used_min: remainder.remaining_time_min,
            });
        }

        let distance_km = self.speed_kmh * time_used_min / 60.0;
        let position = destination(&remainder.start, segment.bearing, distance_km);
        self.active = Some(Remainder {
            start: position,
            remaining_time_min: left,
        });
        tracing::trace!(
            leg = self.cursor,
            time_used_min,
            remaining_min = left,
            "split leg mid-flight"
        );
        Some(Advance::Partial {
            position,
            time_used_min,
        })
    }
}

fn fresh_remainder(segment: &Segment) -> Remainder {
    Remainder {
        start: segment.start,
        remaining_time_min: segment.total_time_min,
    }
}
