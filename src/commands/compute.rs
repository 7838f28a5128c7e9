//! `varclock compute`: the calculator on explicit instants.

use crate::domain::{self, DayBoundary, Instant, PeriodKind};
use crate::error::ClockError;
use crate::face::{text_line, HandAngles};

/// Computes and prints the variable time at `now` for the given day.
///
/// # Errors
///
/// Never fails today; the signature matches the other command handlers.
pub fn run(now: Instant, sunrise: Instant, sunset: Instant) -> Result<(), ClockError> {
    for line in render(now, DayBoundary::new(sunrise, sunset)) {
        println!("{line}");
    }
    Ok(())
}

/// The printed lines, without trailing newlines.
#[must_use]
pub fn render(now: Instant, boundary: DayBoundary) -> Vec<String> {
    let time = domain::compute(now, &boundary);
    let period = domain::period_for(now, &boundary);
    let angles = HandAngles::of(&time);
    let kind = match period.kind {
        PeriodKind::Day => "day",
        PeriodKind::Night => "night",
    };

    vec![
        text_line(&time),
        format!(
            "  hands    hour {:.1}°  minute {:.1}°  second {:.1}°",
            angles.hour, angles.minute, angles.second
        ),
        format!("  {kind:<8} {} .. {}", period.start, period.end),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> Instant {
        text.parse().unwrap()
    }

    #[test]
    fn renders_morning_daylight() {
        let boundary = DayBoundary::new(at("2024-06-15T06:00:00Z"), at("2024-06-15T18:00:00Z"));
        let lines = render(at("2024-06-15T09:00:00Z"), boundary);
        assert_eq!(lines[0], "4:00:00 Day");
        assert!(lines[1].starts_with("  hands    hour 120.0°"));
        assert_eq!(
            lines[2],
            "  day      2024-06-15T06:00:00+00:00 .. 2024-06-15T18:00:00+00:00"
        );
    }

    #[test]
    fn renders_the_night_window_across_midnight() {
        let boundary = DayBoundary::new(at("2024-06-15T06:00:00Z"), at("2024-06-15T18:00:00Z"));
        let lines = render(at("2024-06-15T21:00:00Z"), boundary);
        assert_eq!(lines[0], "4:00:00 Night");
        assert!(lines[2].ends_with("2024-06-15T18:00:00+00:00 .. 2024-06-16T06:00:00+00:00"));
    }
}
