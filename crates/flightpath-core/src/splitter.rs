//! Splits a waypoint route into fixed-duration chunks of timed points.
//!
//! The route is flown at constant speed from the departure clock time. Each
//! chunk starts where the previous one ended, so consecutive chunks share a
//! boundary point.

use crate::clock::ClockTime;
use crate::config::SplitConfig;
use crate::error::{FlightPathError, Result};
use crate::models::{Chunk, TimedPoint, Waypoint};
use crate::segments::{SegmentQueue, CONSUME_EPSILON_MIN};
use crate::spatial::{bearing, distance};

/// Coincident points closer than this get their predecessor's heading.
const SAME_POSITION_KM: f64 = 1e-9;

/// Split `waypoints` into 15 minute chunks flown at `speed_kmh` from `start_time` ("HH:MM").
///
/// Fewer than two waypoints yields no chunks.
pub fn split_flight_path(
    waypoints: &[Waypoint],
    speed_kmh: f64,
    start_time: &str,
) -> Result<Vec<Chunk>> {
    let departure: ClockTime = start_time.parse()?;
    split_flight_path_with(waypoints, speed_kmh, departure, &SplitConfig::default())
}

/// Split without timestamps: chunks of bare positions, departure at midnight.
pub fn split_flight_path_positions(
    waypoints: &[Waypoint],
    speed_kmh: f64,
) -> Result<Vec<Vec<Waypoint>>> {
    let config = SplitConfig {
        annotate_bearing: false,
        ..Default::default()
    };
    let chunks = split_flight_path_with(waypoints, speed_kmh, ClockTime::MIDNIGHT, &config)?;
    Ok(chunks.iter().map(Chunk::positions).collect())
}

/// Split with an explicit departure time and configuration.
pub fn split_flight_path_with(
    waypoints: &[Waypoint],
    speed_kmh: f64,
    departure: ClockTime,
    config: &SplitConfig,
) -> Result<Vec<Chunk>> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(FlightPathError::invalid(format!(
            "speed must be a positive number of km/h, got {speed_kmh}"
        )));
    }
    config.validate()?;

    if waypoints.len() < 2 {
        return Ok(Vec::new());
    }

    let mut queue = SegmentQueue::from_waypoints(waypoints, speed_kmh);
    let total_flight_min = queue.total_time_min();
    tracing::debug!(
        legs = queue.remaining_legs(),
        total_flight_min,
        %departure,
        "splitting route"
    );

    let mut chunks = Vec::new();
    let mut elapsed_min = 0.0_f64;
    let mut position = waypoints[0];

    while total_flight_min - elapsed_min > CONSUME_EPSILON_MIN && !queue.is_empty() {
        let chunk_duration = config.chunk_minutes.min(total_flight_min - elapsed_min);
        let mut chunk_left = chunk_duration;
        let mut points = vec![TimedPoint::new(position, departure, elapsed_min)];

        while chunk_left > CONSUME_EPSILON_MIN {
            let Some(step) = queue.advance(chunk_left) else {
                break;
            };
            elapsed_min += step.time_used_min();
            chunk_left -= step.time_used_min();
            position = step.position();
            points.push(TimedPoint::new(position, departure, elapsed_min));
        }

        if points.len() > 1 {
            if config.annotate_bearing {
                annotate_bearings(&mut points);
            }
            tracing::debug!(
                chunk = chunks.len(),
                points = points.len(),
                elapsed_min,
                "emitted chunk"
            );
            chunks.push(Chunk { points });
        }
    }

    Ok(chunks)
}

/// Set each point's heading toward its successor; the last point keeps its
/// predecessor's heading.
pub fn annotate_bearings(points: &mut [TimedPoint]) {
    let mut previous: Option<f64> = None;
    for i in 0..points.len() {
        let heading = match points.get(i + 1) {
            Some(next) => {
                let here = points[i].position();
                let there = next.position();
                if distance(&here, &there) < SAME_POSITION_KM {
                    previous
                } else {
                    Some(bearing(&here, &there))
                }
            }
            None => previous,
        };
        points[i].bearing = heading;
        previous = heading.or(previous);
    }
}
