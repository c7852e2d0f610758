//! CLI configuration from environment.

use flightpath_core::{PlaybackConfig, SplitConfig};
use std::env;

pub const DEFAULT_SPEED_KMH: f64 = 600.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub speed_kmh: f64,
    pub split: SplitConfig,
    pub playback: PlaybackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            split: SplitConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            speed_kmh: lookup("FLIGHTPATH_SPEED_KMH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.speed_kmh),
            split: SplitConfig {
                chunk_minutes: lookup("FLIGHTPATH_CHUNK_MINUTES")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.split.chunk_minutes),
                annotate_bearing: lookup("FLIGHTPATH_ANNOTATE_BEARING")
                    .and_then(|s| parse_flag(&s))
                    .unwrap_or(defaults.split.annotate_bearing),
            },
            playback: PlaybackConfig {
                ms_per_flight_minute: lookup("FLIGHTPATH_MS_PER_MINUTE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.playback.ms_per_flight_minute),
                ..defaults.playback
            },
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.speed_kmh, DEFAULT_SPEED_KMH);
        assert_eq!(config.split, SplitConfig::default());
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTPATH_SPEED_KMH", "850"),
            ("FLIGHTPATH_CHUNK_MINUTES", "5"),
            ("FLIGHTPATH_ANNOTATE_BEARING", "off"),
            ("FLIGHTPATH_MS_PER_MINUTE", "50"),
        ]));
        assert_eq!(config.speed_kmh, 850.0);
        assert_eq!(config.split.chunk_minutes, 5.0);
        assert!(!config.split.annotate_bearing);
        assert_eq!(config.playback.ms_per_flight_minute, 50);
    }

    #[test]
    fn garbage_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("FLIGHTPATH_SPEED_KMH", "fast"),
            ("FLIGHTPATH_ANNOTATE_BEARING", "maybe"),
        ]));
        assert_eq!(config.speed_kmh, DEFAULT_SPEED_KMH);
        assert!(config.split.annotate_bearing);
    }
}
