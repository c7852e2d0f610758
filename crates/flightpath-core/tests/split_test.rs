//! Route splitting invariants over generated routes.

use flightpath_core::{
    bearing, destination, distance, flatten_chunks, polyline_length, split_flight_path,
    split_flight_path_with, ClockTime, SplitConfig, Waypoint,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_route(rng: &mut StdRng) -> Vec<Waypoint> {
    let legs = rng.random_range(1..=5);
    let mut route = vec![Waypoint::new(
        rng.random_range(-45.0..45.0),
        rng.random_range(-179.0..179.0),
    )];
    for _ in 0..legs {
        let from = *route.last().unwrap();
        let heading = rng.random_range(0.0..360.0);
        let leg_km = rng.random_range(1.0..500.0);
        route.push(destination(&from, heading, leg_km));
    }
    route
}

fn planned_minutes(route: &[Waypoint], speed_kmh: f64) -> f64 {
    polyline_length(route) / speed_kmh * 60.0
}

#[test]
fn generated_routes_hold_chunk_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let route = random_route(&mut rng);
        let speed = rng.random_range(300.0..900.0);
        let total = planned_minutes(&route, speed);

        let chunks = split_flight_path(&route, speed, "06:00").unwrap();

        assert_eq!(chunks.len(), (total / 15.0).ceil() as usize, "total {total}");
        assert!(chunks.iter().all(|c| c.len() > 1), "single point chunk emitted");

        let flat = flatten_chunks(&chunks);
        assert_eq!(flat.first().unwrap().position(), route[0]);
        assert_eq!(flat.last().unwrap().position(), *route.last().unwrap());
        assert!((flat.last().unwrap().elapsed_min - total).abs() < 1e-6);

        for pair in flat.windows(2) {
            assert!(pair[0].elapsed_min <= pair[1].elapsed_min);
        }

        for p in &flat {
            let b = p.bearing.unwrap();
            assert!((0.0..360.0).contains(&b), "bearing {b}");
        }

        let positions: Vec<Waypoint> = flat.iter().map(|p| p.position()).collect();
        let flown = polyline_length(&positions);
        let planned = polyline_length(&route);
        assert!(
            (flown - planned).abs() / planned < 0.02,
            "flown {flown} km vs planned {planned} km"
        );
    }
}

#[test]
fn reach_time_is_non_decreasing_within_a_day() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let route = random_route(&mut rng);
        let chunks = split_flight_path(&route, 800.0, "00:00").unwrap();
        let times: Vec<ClockTime> = flatten_chunks(&chunks).iter().map(|p| p.reach_time).collect();
        for pair in times.windows(2) {
            assert!(pair[0] <= pair[1], "{} then {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn geodesic_laws_hold_on_generated_points() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Waypoint::new(rng.random_range(-80.0..80.0), rng.random_range(-180.0..180.0));
        let q = Waypoint::new(rng.random_range(-80.0..80.0), rng.random_range(-180.0..180.0));

        assert_eq!(distance(&p, &p), 0.0);
        assert!((distance(&p, &q) - distance(&q, &p)).abs() < 1e-6);

        let b = bearing(&p, &q);
        assert!((0.0..360.0).contains(&b));

        let r = destination(&p, b, distance(&p, &q));
        assert!(distance(&r, &q) < 1e-6, "round trip missed by {} km", distance(&r, &q));
    }
}

#[test]
fn demo_route_schedule() {
    let route = [
        Waypoint::new(24.8331, 113.4898),
        Waypoint::new(25.8470, 116.2414),
        Waypoint::new(21.4814, 119.0291),
    ];
    let total = planned_minutes(&route, 600.0);
    let chunks = split_flight_path(&route, 600.0, "07:15").unwrap();

    assert_eq!(chunks.len(), (total / 15.0).ceil() as usize);
    assert_eq!(chunks[0].first().unwrap().reach_time.to_string(), "07:15");
    let expected_end = ClockTime::from_hm(7, 15).unwrap().advanced_by(total);
    assert_eq!(chunks.last().unwrap().last().unwrap().reach_time, expected_end);
}

#[test]
fn output_serializes_as_nested_point_lists() {
    let route = [Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 2.0)];
    let config = SplitConfig::default();
    let chunks =
        split_flight_path_with(&route, 600.0, ClockTime::from_hm(9, 0).unwrap(), &config).unwrap();
    let json = serde_json::to_value(&chunks).unwrap();

    let first = &json[0][0];
    assert_eq!(first["reach_time"], "09:00");
    assert_eq!(first["lat"], 0.0);
    assert!(first["bearing"].as_f64().is_some());
    assert!(json[0].as_array().unwrap().len() >= 2);
}
