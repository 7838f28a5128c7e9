//! Clock port feeding "now" to the tick source.

use chrono::{DateTime, Local, Utc};

use crate::domain::Instant;

/// Source of the current wall-clock time.
///
/// The ticker reads this once per tick; tests and cassette playback swap in
/// a fixed or recorded clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current time as an [`Instant`].
    fn instant(&self) -> Instant {
        Instant::from(self.now())
    }

    /// Returns the current time in the host's local zone.
    fn local_now(&self) -> DateTime<Local> {
        self.now().with_timezone(&Local)
    }
}
