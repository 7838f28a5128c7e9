//! Sunrise/sunset pairs for a calendar day.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};

use super::instant::Instant;

/// Local hour used as sunrise when no sun times are available.
pub const FALLBACK_SUNRISE_HOUR: i64 = 6;
/// Local hour used as sunset when no sun times are available.
pub const FALLBACK_SUNSET_HOUR: i64 = 18;

/// The sunrise and sunset instants splitting a day into daylight and night.
///
/// `sunrise < sunset` is expected but not enforced; polar days and nights
/// produce degenerate boundaries that flow through the calculator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBoundary {
    /// Start of daylight.
    pub sunrise: Instant,
    /// End of daylight.
    pub sunset: Instant,
}

impl DayBoundary {
    /// Creates a boundary from the two instants.
    #[must_use]
    pub const fn new(sunrise: Instant, sunset: Instant) -> Self {
        Self { sunrise, sunset }
    }

    /// Returns the fixed 06:00-18:00 boundary for `now`'s calendar day,
    /// interpreted in `now`'s time zone.
    #[must_use]
    pub fn fallback_on<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let date = now.date_naive();
        Self {
            sunrise: local_hour(now, date, FALLBACK_SUNRISE_HOUR),
            sunset: local_hour(now, date, FALLBACK_SUNSET_HOUR),
        }
    }

    /// Whether sunrise strictly precedes sunset.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.sunrise < self.sunset
    }
}

fn local_hour<Tz: TimeZone>(now: &DateTime<Tz>, date: NaiveDate, hour: i64) -> Instant {
    let naive: NaiveDateTime = date.and_time(NaiveTime::MIN) + Duration::hours(hour);
    match now.timezone().from_local_datetime(&naive).earliest() {
        Some(resolved) => Instant::from(resolved),
        // Wall-clock time skipped by a DST jump; keep the offset in force at `now`.
        None => {
            let offset_ms = i64::from(now.offset().fix().local_minus_utc()) * 1000;
            Instant::from(naive.and_utc()).offset(-offset_ms)
        }
    }
}
