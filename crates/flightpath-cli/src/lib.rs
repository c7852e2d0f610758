//! Flightpath CLI - command line tools for splitting routes into playback chunks.
//!
//! This crate provides:
//! - split_route: split a waypoint file into timed chunks and print them as JSON

pub mod config;
pub mod render;
pub mod route_file;

pub use config::Config;
pub use render::TracingRenderer;
pub use route_file::{demo_route, load_waypoints, parse_waypoints};
