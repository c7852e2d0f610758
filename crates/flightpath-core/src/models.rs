//! Core data models for route splitting.

use crate::clock::ClockTime;
use serde::{Deserialize, Serialize};

/// A route vertex in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// A position on the route with the wall-clock time it is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedPoint {
    pub lat: f64,
    pub lon: f64,
    /// Wall-clock minute nearest to departure plus `elapsed_min`, wrapped at midnight.
    pub reach_time: ClockTime,
    /// Exact minutes since departure; unlike `reach_time` this never wraps.
    pub elapsed_min: f64,
    /// Heading toward the next point in the chunk, degrees from true north.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<f64>,
}

impl TimedPoint {
    pub fn new(position: Waypoint, departure: ClockTime, elapsed_min: f64) -> Self {
        Self {
            lat: position.lat,
            lon: position.lon,
            reach_time: departure.advanced_by(elapsed_min),
            elapsed_min,
            bearing: None,
        }
    }

    pub fn position(&self) -> Waypoint {
        Waypoint::new(self.lat, self.lon)
    }
}

/// A slice of at most one chunk duration of flight, consumed as a unit by playback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chunk {
    pub points: Vec<TimedPoint>,
}

impl Chunk {
    /// Bare positions, the minimal output form.
    pub fn positions(&self) -> Vec<Waypoint> {
        self.points.iter().map(TimedPoint::position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TimedPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TimedPoint> {
        self.points.last()
    }

    pub fn start_time(&self) -> Option<ClockTime> {
        self.first().map(|p| p.reach_time)
    }

    pub fn end_time(&self) -> Option<ClockTime> {
        self.last().map(|p| p.reach_time)
    }

    /// Flight minutes covered by this chunk.
    pub fn duration_min(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last.elapsed_min - first.elapsed_min,
            _ => 0.0,
        }
    }
}

/// Concatenate chunks into one timed polyline, dropping the point each chunk
/// shares with its predecessor.
pub fn flatten_chunks(chunks: &[Chunk]) -> Vec<TimedPoint> {
    let mut route: Vec<TimedPoint> = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let skip = usize::from(i > 0 && !route.is_empty());
        route.extend(chunk.points.iter().skip(skip).cloned());
    }
    route
}
