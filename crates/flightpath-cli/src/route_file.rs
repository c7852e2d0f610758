//! Waypoint input files.

use anyhow::{bail, Context, Result};
use flightpath_core::Waypoint;
use std::fs;
use std::path::Path;

/// Three-waypoint route used when no file is given.
pub fn demo_route() -> Vec<Waypoint> {
    vec![
        Waypoint::new(24.833118438720703, 113.4898452758789),
        Waypoint::new(25.8470458984375, 116.2413558959961),
        Waypoint::new(21.48139762878418, 119.02906036376953),
    ]
}

/// Parse a JSON array of `{"lat": .., "lon": ..}` objects.
pub fn parse_waypoints(json: &str) -> Result<Vec<Waypoint>> {
    let waypoints: Vec<Waypoint> =
        serde_json::from_str(json).context("waypoints must be a JSON array of {lat, lon}")?;
    for (i, wp) in waypoints.iter().enumerate() {
        if !(-90.0..=90.0).contains(&wp.lat) || !(-180.0..=180.0).contains(&wp.lon) {
            bail!("waypoint {i} out of range: lat {}, lon {}", wp.lat, wp.lon);
        }
    }
    Ok(waypoints)
}

pub fn load_waypoints(path: &Path) -> Result<Vec<Waypoint>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read waypoints from {}", path.display()))?;
    parse_waypoints(&raw).with_context(|| format!("invalid waypoint file {}", path.display()))
}
