//! Live clock using the system clock.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock backed by the host's system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_tracks_system_time() {
        let before = Utc::now().timestamp_millis();
        let now = SystemClock.instant().as_millis();
        let after = Utc::now().timestamp_millis();

        assert!(before <= now && now <= after);
    }
}
