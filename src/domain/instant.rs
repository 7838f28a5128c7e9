//! Absolute points in time as epoch milliseconds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// Milliseconds in one fixed 24-hour day.
pub const DAY_MILLIS: i64 = 86_400_000;

/// An absolute point in time, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// Creates an instant from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the epoch milliseconds of this instant.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns this instant shifted by `millis` (negative shifts go back).
    #[must_use]
    pub const fn offset(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Converts to a UTC date-time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidInstant`] when the value is outside the
    /// range `chrono` can represent.
    pub fn to_utc(self) -> Result<DateTime<Utc>, ClockError> {
        DateTime::from_timestamp_millis(self.0)
            .ok_or_else(|| ClockError::InvalidInstant(format!("{} ms out of range", self.0)))
    }

    /// Converts to a date-time in the host's local zone.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidInstant`] when the value is out of range.
    pub fn to_local(self) -> Result<DateTime<Local>, ClockError> {
        self.to_utc().map(|utc| utc.with_timezone(&Local))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Ok(utc) => write!(f, "{}", utc.to_rfc3339()),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

/// Parses either an RFC 3339 timestamp or a bare integer of epoch milliseconds.
impl FromStr for Instant {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(millis) = trimmed.parse::<i64>() {
            return Ok(Self(millis));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(Self::from)
            .map_err(|e| ClockError::InvalidInstant(format!("{trimmed:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_millis() {
        let a: Instant = "2024-06-15T10:30:00Z".parse().unwrap();
        let b: Instant = "1718447400000".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "half past nine".parse::<Instant>().unwrap_err();
        assert!(matches!(err, ClockError::InvalidInstant(_)));
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let max = Instant::from_millis(i64::MAX);
        assert_eq!(max.offset(DAY_MILLIS), max);
    }

    #[test]
    fn out_of_range_instant_displays_raw_millis() {
        let huge = Instant::from_millis(i64::MAX);
        assert!(huge.to_utc().is_err());
        assert_eq!(huge.to_string(), format!("{}ms", i64::MAX));
    }
}
