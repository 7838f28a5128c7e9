//! Variable-hour calculator.
//!
//! Daylight (sunrise to sunset) and night (sunset to the next sunrise) are
//! each divided into twelve equal "variable hours". The position inside the
//! current variable hour is projected onto a conventional 60-minute and
//! 60-second face.
//!
//! The next sunrise is approximated as today's sunrise plus a fixed 24 hours,
//! and the previous sunset as today's sunset minus 24 hours. Outside the
//! resulting window (a session that outlives its day) the hour index runs
//! past 12 rather than being corrected.

use serde::{Deserialize, Serialize};

use super::boundary::DayBoundary;
use super::instant::{Instant, DAY_MILLIS};

/// Number of variable hours in each of the day and night periods.
pub const HOURS_PER_PERIOD: f64 = 12.0;

/// Whether a period is daylight or night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    /// Sunrise to sunset.
    Day,
    /// Sunset to the following sunrise.
    Night,
}

/// The daylight or night span a moment falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Day or night.
    pub kind: PeriodKind,
    /// First instant of the period.
    pub start: Instant,
    /// First instant after the period.
    pub end: Instant,
}

impl Period {
    /// Length of the period in milliseconds. Zero or negative for degenerate boundaries.
    #[must_use]
    pub const fn duration_millis(&self) -> i64 {
        self.end.as_millis().saturating_sub(self.start.as_millis())
    }
}

/// Position of a moment on the variable-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableTimeOfDay {
    /// 1-based variable hour within the period; 1..=12 while inside it.
    pub hour_index: i64,
    /// Position within the variable hour scaled to 0..=59.
    pub minute_into_hour: u32,
    /// Position within the variable hour scaled to 0..=59 seconds.
    pub second_into_hour: u32,
    /// Whether the moment lies between sunrise and sunset.
    pub is_daytime: bool,
}

/// Selects the period `now` belongs to.
#[must_use]
pub fn period_for(now: Instant, boundary: &DayBoundary) -> Period {
    let DayBoundary { sunrise, sunset } = *boundary;
    if sunrise <= now && now < sunset {
        Period {
            kind: PeriodKind::Day,
            start: sunrise,
            end: sunset,
        }
    } else if now < sunrise {
        Period {
            kind: PeriodKind::Night,
            start: sunset.offset(-DAY_MILLIS),
            end: sunrise,
        }
    } else {
        Period {
            kind: PeriodKind::Night,
            start: sunset,
            end: sunrise.offset(DAY_MILLIS),
        }
    }
}

/// Computes the variable time of day for `now`.
///
/// Never panics: a degenerate boundary (sunrise at or after sunset) yields a
/// zero or negative period and the non-finite intermediates saturate when
/// converted to integers.
///
/// Minutes and seconds are independent projections of the same fraction of
/// the hour; the seconds are not derived from the minute remainder.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn compute(now: Instant, boundary: &DayBoundary) -> VariableTimeOfDay {
    let period = period_for(now, boundary);
    let elapsed = now.as_millis().saturating_sub(period.start.as_millis()) as f64;
    let hour_duration = period.duration_millis() as f64 / HOURS_PER_PERIOD;

    let hour_index = ((elapsed / hour_duration).floor() as i64).saturating_add(1);
    let fraction = elapsed.rem_euclid(hour_duration) / hour_duration;
    let minute_into_hour = (fraction * 60.0).floor() as u32;
    let second_into_hour = (fraction * 3600.0).rem_euclid(60.0).floor() as u32;

    VariableTimeOfDay {
        hour_index,
        minute_into_hour,
        second_into_hour,
        is_daytime: period.kind == PeriodKind::Day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;
    const MINUTE: i64 = 60_000;

    /// Midnight of an arbitrary day, in UTC.
    const MIDNIGHT: i64 = 1_718_409_600_000;

    fn at(hours: i64, minutes: i64) -> Instant {
        Instant::from_millis(MIDNIGHT + hours * HOUR + minutes * MINUTE)
    }

    fn six_to_six() -> DayBoundary {
        DayBoundary::new(at(6, 0), at(18, 0))
    }

    fn hms(time: &VariableTimeOfDay) -> (i64, u32, u32) {
        (time.hour_index, time.minute_into_hour, time.second_into_hour)
    }

    #[test]
    fn mid_morning_of_an_equal_day() {
        let time = compute(at(9, 0), &six_to_six());
        assert_eq!(
            time,
            VariableTimeOfDay {
                hour_index: 4,
                minute_into_hour: 0,
                second_into_hour: 0,
                is_daytime: true
            }
        );
    }

    #[test]
    fn evening_uses_sunset_to_next_sunrise() {
        let boundary = six_to_six();
        let period = period_for(at(21, 0), &boundary);
        assert_eq!(period.kind, PeriodKind::Night);
        assert_eq!(period.start, at(18, 0));
        assert_eq!(period.end, at(30, 0));
        assert_eq!(period.duration_millis(), 12 * HOUR);

        let time = compute(at(21, 0), &boundary);
        assert_eq!(hms(&time), (4, 0, 0));
        assert!(!time.is_daytime);
    }

    #[test]
    fn long_winter_night_stretches_each_hour() {
        // 10h of daylight leaves 14h of night: each variable hour is 70 minutes.
        let boundary = DayBoundary::new(at(7, 0), at(17, 0));
        let time = compute(at(21, 0), &boundary);
        assert_eq!(time.hour_index, 4);
        assert_eq!(time.minute_into_hour, 25);
        assert_eq!(time.second_into_hour, 42);
        assert!(!time.is_daytime);
    }

    #[test]
    fn start_of_period_is_hour_one() {
        let boundary = six_to_six();
        for start in [boundary.sunrise, boundary.sunset] {
            let time = compute(start, &boundary);
            assert_eq!(hms(&time), (1, 0, 0));
        }
    }

    #[test]
    fn last_millisecond_of_period_is_hour_twelve() {
        let boundary = six_to_six();
        let time = compute(boundary.sunset.offset(-1), &boundary);
        assert_eq!(time.hour_index, 12);
        assert_eq!(time.minute_into_hour, 59);
        assert_eq!(time.second_into_hour, 59);
        assert!(time.is_daytime);

        let time = compute(boundary.sunrise.offset(DAY_MILLIS - 1), &boundary);
        assert_eq!(time.hour_index, 12);
        assert!(!time.is_daytime);
    }

    #[test]
    fn daytime_is_half_open_between_sunrise_and_sunset() {
        let boundary = six_to_six();
        assert!(compute(boundary.sunrise, &boundary).is_daytime);
        assert!(!compute(boundary.sunrise.offset(-1), &boundary).is_daytime);
        assert!(!compute(boundary.sunset, &boundary).is_daytime);
    }

    #[test]
    fn pre_dawn_counts_from_previous_sunset() {
        let boundary = six_to_six();
        let period = period_for(at(3, 0), &boundary);
        assert_eq!(period.start, at(-6, 0));
        assert_eq!(period.end, at(6, 0));

        let time = compute(at(3, 0), &boundary);
        assert_eq!(time.hour_index, 10);
        assert!(!time.is_daytime);
    }

    #[test]
    fn hour_index_stays_within_twelve_across_a_whole_day() {
        let boundary = DayBoundary::new(at(5, 17), at(20, 43));
        let mut now = at(0, 0);
        while now < at(24, 0) {
            let time = compute(now, &boundary);
            assert!((1..=12).contains(&time.hour_index), "{now}: {time:?}");
            assert!(time.minute_into_hour <= 59);
            assert!(time.second_into_hour <= 59);
            now = now.offset(7 * MINUTE + 13_000);
        }
    }

    #[test]
    fn stale_boundary_runs_past_twelve() {
        let boundary = six_to_six();
        let time = compute(at(31, 0), &boundary);
        assert!(time.hour_index > 12);
    }

    #[test]
    fn degenerate_boundary_does_not_panic() {
        let same = DayBoundary::new(at(12, 0), at(12, 0));
        let _ = compute(at(12, 0), &same);

        let reversed = DayBoundary::new(at(18, 0), at(6, 0));
        let time = compute(at(9, 0), &reversed);
        assert!(!time.is_daytime);

        // Sunset exactly 24h after sunrise leaves an empty night.
        let empty_night = DayBoundary::new(at(0, 0), at(24, 0));
        let time = compute(at(24, 0), &empty_night);
        assert!(!time.is_daytime);
    }
}
