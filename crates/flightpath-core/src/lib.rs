//! Flight path segmentation and timing.
//!
//! Splits a waypoint route flown at constant speed into fixed-duration chunks
//! of timestamped, heading-annotated points for map playback.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod playback;
pub mod segments;
pub mod spatial;
pub mod splitter;

pub use clock::{colon_time_to_minutes, ClockTime};
pub use config::{PlaybackConfig, SplitConfig};
pub use error::{FlightPathError, Result};
pub use models::{flatten_chunks, Chunk, TimedPoint, Waypoint};
pub use playback::{play_route, FadeFrame, FadeOverlay, MarkerKind, PlaybackSummary, RouteRenderer};
pub use segments::{build_segments, Segment, SegmentQueue};
pub use spatial::{bearing, destination, distance, polyline_length};
pub use splitter::{split_flight_path, split_flight_path_positions, split_flight_path_with};
