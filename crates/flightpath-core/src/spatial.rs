//! Great-circle math on a spherical Earth.
//!
//! Angles are degrees at the interface and radians internally. Inputs are
//! expected within `-90..=90` latitude and `-180..=180` longitude; nothing
//! here validates them.

use crate::models::Waypoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two points in kilometers using the Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial great-circle bearing from point 1 to point 2.
/// Returns degrees clockwise from true north in `[0, 360)`.
pub fn initial_bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_bearing(x.atan2(y).to_degrees())
}

/// Fold any angle in degrees into `[0, 360)`.
pub fn normalize_bearing(deg: f64) -> f64 {
    let folded = (deg % 360.0 + 360.0) % 360.0;
    // tiny negative inputs round up to exactly 360.0
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Offset a position by distance and bearing along a great circle.
///
/// # Arguments
/// * `lat`, `lon` - Starting position in degrees
/// * `distance_km` - Distance in kilometers
/// * `bearing_deg` - Bearing in degrees (0 = north, 90 = east)
///
/// # Returns
/// (new_lat, new_lon) in degrees, longitude in `[-180, 180)`
pub fn offset_by_bearing(lat: f64, lon: f64, distance_km: f64, bearing_deg: f64) -> (f64, f64) {
    if distance_km.abs() <= f64::EPSILON {
        return (lat, lon);
    }

    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();
    let theta = bearing_deg.to_radians();
    let angular_distance = distance_km / EARTH_RADIUS_KM;

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_ad = angular_distance.sin();
    let cos_ad = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_ad + cos_lat1 * sin_ad * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = theta.sin() * sin_ad * cos_lat1;
    let x = cos_ad - sin_lat1 * sin_lat2;
    let mut lon2 = lon1 + y.atan2(x);
    lon2 =
        (lon2 + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI) - std::f64::consts::PI;

    (lat2.to_degrees(), lon2.to_degrees())
}

/// Great-circle distance between two waypoints in kilometers.
pub fn distance(p1: &Waypoint, p2: &Waypoint) -> f64 {
    haversine_distance_km(p1.lat, p1.lon, p2.lat, p2.lon)
}

/// Initial bearing from `p1` toward `p2` in degrees `[0, 360)`.
pub fn bearing(p1: &Waypoint, p2: &Waypoint) -> f64 {
    initial_bearing_deg(p1.lat, p1.lon, p2.lat, p2.lon)
}

/// Point reached after `distance_km` from `p` along `bearing_deg`.
pub fn destination(p: &Waypoint, bearing_deg: f64, distance_km: f64) -> Waypoint {
    let (lat, lon) = offset_by_bearing(p.lat, p.lon, distance_km, bearing_deg);
    Waypoint { lat, lon }
}

/// Total great-circle length of a polyline in kilometers.
pub fn polyline_length(points: &[Waypoint]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}
