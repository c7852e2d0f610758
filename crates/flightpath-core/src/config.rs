//! Tunables for splitting and playback.

use crate::error::{FlightPathError, Result};
use crate::segments::CONSUME_EPSILON_MIN;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHUNK_MINUTES: f64 = 15.0;

/// Configuration for the path splitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Flight minutes per emitted chunk
    pub chunk_minutes: f64,
    /// Annotate each point with the heading toward its successor
    pub annotate_bearing: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            chunk_minutes: DEFAULT_CHUNK_MINUTES,
            annotate_bearing: true,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.chunk_minutes.is_finite() || self.chunk_minutes <= CONSUME_EPSILON_MIN {
            return Err(FlightPathError::invalid(format!(
                "chunk duration must be a positive number of minutes, got {}",
                self.chunk_minutes
            )));
        }
        Ok(())
    }
}

/// Configuration for route playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Real milliseconds spent animating one minute of flight
    pub ms_per_flight_minute: u64,
    /// Cross-fade length between consecutive chunk layers
    pub fade_duration_ms: u64,
    /// Step between emitted cross-fade frames
    pub fade_frame_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ms_per_flight_minute: 200,
            fade_duration_ms: 500,
            fade_frame_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SplitConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_chunk_duration() {
        for minutes in [0.0, -15.0, f64::NAN, f64::INFINITY] {
            let config = SplitConfig {
                chunk_minutes: minutes,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {minutes}");
        }
    }

    #[test]
    fn rejects_chunk_duration_below_consume_epsilon() {
        for minutes in [CONSUME_EPSILON_MIN, 1e-10, f64::MIN_POSITIVE] {
            let config = SplitConfig {
                chunk_minutes: minutes,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {minutes}");
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SplitConfig = serde_json::from_str(r#"{"annotate_bearing": false}"#).unwrap();
        assert_eq!(config.chunk_minutes, DEFAULT_CHUNK_MINUTES);
        assert!(!config.annotate_bearing);
    }
}
