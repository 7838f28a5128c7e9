//! Sun-time port for looking up sunrise and sunset.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;

use crate::domain::{DayBoundary, GeoCoordinate};
use crate::error::ClockError;

/// Boxed future type alias used by [`SunTimeProvider`] to keep the trait dyn-compatible.
pub type SunTimesFuture<'a> =
    Pin<Box<dyn Future<Output = Result<DayBoundary, ClockError>> + Send + 'a>>;

/// Looks up sunrise and sunset for a coordinate and calendar day.
pub trait SunTimeProvider: Send + Sync {
    /// Fetches the day boundary for `date` at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the response is malformed.
    fn sun_times(&self, coordinate: GeoCoordinate, date: NaiveDate) -> SunTimesFuture<'_>;
}
