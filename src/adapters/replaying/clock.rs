//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::CLOCK_PORT;
use crate::ports::clock::Clock;

/// Replays recorded clock readings.
///
/// Once the recording runs out the clock stays frozen at the last replayed
/// reading (or the Unix epoch if nothing was recorded).
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
    last: Mutex<DateTime<Utc>>,
}

impl ReplayingClock {
    /// Creates a replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
            last: Mutex::new(DateTime::<Utc>::default()),
        }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let replayed = next_output(&self.replayer, CLOCK_PORT, "now").and_then(|output| {
            serde_json::from_value::<DateTime<Utc>>(output).map_err(|e| {
                crate::error::ClockError::Cassette(format!("clock::now: bad reading: {e}"))
            })
        });

        let Ok(mut last) = self.last.lock() else {
            return DateTime::<Utc>::default();
        };
        match replayed {
            Ok(now) => *last = now,
            Err(e) => debug!(error = %e, frozen_at = %*last, "replayed clock frozen"),
        }
        *last
    }
}
