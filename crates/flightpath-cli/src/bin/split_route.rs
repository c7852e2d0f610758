//! Split a flight route into 15 minute playback chunks.
//!
//! Reads a JSON array of `{lat, lon}` waypoints (or uses the built-in demo
//! route), flies it at constant speed from the departure time, and prints the
//! chunks as JSON on stdout. Logs go to stderr.
//!
//! Usage:
//!   cargo run -p flightpath-cli --bin split_route -- --start 07:15 --pretty

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use flightpath_cli::{demo_route, load_waypoints, Config, TracingRenderer};
use flightpath_core::{
    flatten_chunks, play_route, polyline_length, split_flight_path_with, ClockTime, SplitConfig,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with an array of {lat, lon} waypoints
    #[arg(long)]
    waypoints: Option<PathBuf>,

    /// Cruise speed in km/h (defaults to FLIGHTPATH_SPEED_KMH or 600)
    #[arg(long)]
    speed: Option<f64>,

    /// Departure time as HH:MM (defaults to the local time now)
    #[arg(long)]
    start: Option<String>,

    /// Flight minutes per chunk (defaults to FLIGHTPATH_CHUNK_MINUTES or 15)
    #[arg(long)]
    chunk_minutes: Option<f64>,

    /// Skip heading annotation
    #[arg(long)]
    no_bearing: bool,

    /// Print bare {lat, lon} chunks without timestamps
    #[arg(long)]
    positions_only: bool,

    /// Replay the chunks through the logging renderer
    #[arg(long)]
    playback: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("split_route=info".parse()?)
                .add_directive("flightpath_cli=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let waypoints = match &args.waypoints {
        Some(path) => load_waypoints(path)?,
        None => {
            tracing::info!("No waypoint file given, using demo route");
            demo_route()
        }
    };

    let departure: ClockTime = match &args.start {
        Some(raw) => raw.parse::<ClockTime>().context("invalid --start")?,
        None => Local::now().time().into(),
    };
    let speed_kmh = args.speed.unwrap_or(config.speed_kmh);
    let split = SplitConfig {
        chunk_minutes: args.chunk_minutes.unwrap_or(config.split.chunk_minutes),
        annotate_bearing: config.split.annotate_bearing && !args.no_bearing && !args.positions_only,
    };

    let chunks = split_flight_path_with(&waypoints, speed_kmh, departure, &split)?;
    let flown_km = polyline_length(
        &flatten_chunks(&chunks)
            .iter()
            .map(|p| p.position())
            .collect::<Vec<_>>(),
    );
    tracing::info!(
        waypoints = waypoints.len(),
        chunks = chunks.len(),
        speed_kmh,
        %departure,
        arrival = %chunks.last().and_then(|c| c.end_time()).unwrap_or(departure),
        distance_km = flown_km,
        "Route split"
    );

    if args.playback {
        let mut renderer = TracingRenderer::default();
        let summary = play_route(&chunks, &mut renderer, &config.playback);
        tracing::info!(
            chunks = summary.chunks,
            legs = summary.legs,
            total_ms = summary.total_ms,
            "Playback complete"
        );
    }

    let output = if args.positions_only {
        let bare: Vec<_> = chunks.iter().map(|c| c.positions()).collect();
        to_json(&bare, args.pretty)?
    } else {
        to_json(&chunks, args.pretty)?
    };
    println!("{output}");

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize chunks")
}
