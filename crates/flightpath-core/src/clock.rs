//! Wall-clock time of day in whole minutes.

use crate::error::{FlightPathError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 1440;

/// Time of day as minutes since midnight, always in `0..1440`.
///
/// Serializes as a zero-padded `"HH:MM"` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hours and minutes. Returns `None` outside 00:00..=23:59.
    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self(hours * 60 + minutes))
        } else {
            None
        }
    }

    /// Wraps any minute count (negative included) onto the 24h dial.
    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY as i64) as u16)
    }

    /// Nearest whole minute to `minutes`, wrapped onto the 24h dial.
    pub fn from_fractional_minutes(minutes: f64) -> Self {
        Self::from_minutes(minutes.round() as i64)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hours(self) -> u16 {
        self.0 / 60
    }

    pub fn minute_of_hour(self) -> u16 {
        self.0 % 60
    }

    /// Time reached after `elapsed_min` minutes, rounded to the nearest minute.
    pub fn advanced_by(self, elapsed_min: f64) -> Self {
        Self::from_fractional_minutes(self.0 as f64 + elapsed_min)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minute_of_hour())
    }
}

impl FromStr for ClockTime {
    type Err = FlightPathError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FlightPathError::invalid(format!("start time {s:?} is not HH:MM"));

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: u16 = hh.parse().map_err(|_| invalid())?;
        let minutes: u16 = mm.parse().map_err(|_| invalid())?;

        Self::from_hm(hours, minutes).ok_or_else(|| {
            FlightPathError::invalid(format!(
                "start time {s:?} out of range (hours 00-23, minutes 00-59)"
            ))
        })
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a `"HH:MM"` string into minutes since midnight.
pub fn colon_time_to_minutes(s: &str) -> Result<u16> {
    s.parse::<ClockTime>().map(ClockTime::minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(colon_time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(colon_time_to_minutes("07:15").unwrap(), 435);
        assert_eq!(colon_time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "7:15", "07:5", "0715", "24:00", "12:60", "ab:cd", "+1:00", "07:15:00", " 07:15"] {
            assert!(
                matches!(colon_time_to_minutes(bad), Err(FlightPathError::InvalidInput(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn wraps_past_midnight() {
        let late = ClockTime::from_hm(23, 50).unwrap();
        assert_eq!(late.advanced_by(20.0).to_string(), "00:10");
        assert_eq!(ClockTime::from_minutes(-1).to_string(), "23:59");
    }

    #[test]
    fn rounds_to_nearest_minute() {
        let start = ClockTime::from_hm(7, 15).unwrap();
        assert_eq!(start.advanced_by(14.999_999_9).to_string(), "07:30");
        assert_eq!(start.advanced_by(0.4).to_string(), "07:15");
    }

    #[test]
    fn converts_from_naive_time() {
        let t = NaiveTime::from_hms_opt(18, 42, 31).unwrap();
        assert_eq!(ClockTime::from(t).to_string(), "18:42");
    }

    #[test]
    fn serializes_as_string() {
        let t = ClockTime::from_hm(9, 5).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:05\"");
        let back: ClockTime = serde_json::from_str("\"09:05\"").unwrap();
        assert_eq!(back, t);
    }
}
