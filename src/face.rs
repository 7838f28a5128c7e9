//! Clock-face presentation of a variable time of day.

use std::fmt;

use crate::domain::{DayBoundary, GeoCoordinate, Instant, VariableTimeOfDay};

/// Rotation of each hand in degrees clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    /// Hour hand.
    pub hour: f64,
    /// Minute hand.
    pub minute: f64,
    /// Second hand.
    pub second: f64,
}

impl HandAngles {
    /// Angles for `time`: a full turn per 12 variable hours, 60 minutes and 60 seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(time: &VariableTimeOfDay) -> Self {
        Self {
            hour: time.hour_index as f64 / 12.0 * 360.0,
            minute: f64::from(time.minute_into_hour) / 60.0 * 360.0,
            second: f64::from(time.second_into_hour) / 60.0 * 360.0,
        }
    }
}

/// `Day` or `Night`.
#[must_use]
pub const fn period_label(time: &VariableTimeOfDay) -> &'static str {
    if time.is_daytime {
        "Day"
    } else {
        "Night"
    }
}

/// The text line shown under the face, e.g. `4:07:30 Day`.
#[must_use]
pub fn text_line(time: &VariableTimeOfDay) -> String {
    format!(
        "{}:{:02}:{:02} {}",
        time.hour_index,
        time.minute_into_hour,
        time.second_into_hour,
        period_label(time)
    )
}

/// Everything rendered for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The moment this frame shows.
    pub now: Instant,
    /// Variable time of day at `now`.
    pub time: VariableTimeOfDay,
    /// Hand rotations for `time`.
    pub angles: HandAngles,
    /// Sunrise and sunset in effect.
    pub boundary: DayBoundary,
    /// Where the clock is running.
    pub coordinate: GeoCoordinate,
}

impl Frame {
    /// Builds the frame for `time` at `now`.
    #[must_use]
    pub fn new(
        now: Instant,
        time: VariableTimeOfDay,
        boundary: DayBoundary,
        coordinate: GeoCoordinate,
    ) -> Self {
        Self {
            now,
            time,
            angles: HandAngles::of(&time),
            boundary,
            coordinate,
        }
    }
}

/// Local wall-clock `HH:MM:SS` of an instant, or its raw value when out of range.
#[must_use]
pub fn wall_clock(instant: Instant) -> String {
    instant.to_local().map_or_else(
        |_| instant.to_string(),
        |local| local.format("%H:%M:%S").to_string(),
    )
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", text_line(&self.time))?;
        writeln!(
            f,
            "  hands    hour {:.1}°  minute {:.1}°  second {:.1}°",
            self.angles.hour, self.angles.minute, self.angles.second
        )?;
        writeln!(
            f,
            "  sunrise  {}  sunset {}",
            wall_clock(self.boundary.sunrise),
            wall_clock(self.boundary.sunset)
        )?;
        write!(f, "  location {}", self.coordinate)
    }
}
