//! Recording adapter for the `SunTimeProvider` port.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::SUN_TIMES_PORT;
use crate::domain::GeoCoordinate;
use crate::ports::{SunTimeProvider, SunTimesFuture};

/// Records sun-time lookups while delegating to an inner provider.
pub struct RecordingSunTimeProvider {
    inner: Arc<dyn SunTimeProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSunTimeProvider {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Arc<dyn SunTimeProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct LookupInput {
    coordinate: GeoCoordinate,
    date: NaiveDate,
}

impl SunTimeProvider for RecordingSunTimeProvider {
    fn sun_times(&self, coordinate: GeoCoordinate, date: NaiveDate) -> SunTimesFuture<'_> {
        Box::pin(async move {
            let result = self.inner.sun_times(coordinate, date).await;
            let input = LookupInput { coordinate, date };
            record_result(&self.recorder, SUN_TIMES_PORT, "sun_times", &input, &result);
            result
        })
    }
}
