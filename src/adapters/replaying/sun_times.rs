//! Replaying adapter for the `SunTimeProvider` port.

use std::sync::Mutex;

use chrono::NaiveDate;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::SUN_TIMES_PORT;
use crate::domain::GeoCoordinate;
use crate::error::ClockError;
use crate::ports::{SunTimeProvider, SunTimesFuture};

/// Serves recorded sun-time lookups, whatever coordinate and date are asked for.
pub struct ReplayingSunTimeProvider {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingSunTimeProvider {
    /// Creates a replaying provider from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl SunTimeProvider for ReplayingSunTimeProvider {
    fn sun_times(&self, _coordinate: GeoCoordinate, _date: NaiveDate) -> SunTimesFuture<'_> {
        let result = next_output(&self.replayer, SUN_TIMES_PORT, "sun_times")
            .and_then(|output| replay_result(output, ClockError::SunTimes));
        Box::pin(async move { result })
    }
}
