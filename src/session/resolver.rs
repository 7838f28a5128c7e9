//! One-shot location and sun-time resolution with fallbacks.
//!
//! Neither resolver can fail: every port error is logged and replaced by a
//! fixed fallback so the session always reaches a renderable state.

use chrono::{DateTime, TimeZone};
use tracing::{info, warn};

use crate::domain::{DayBoundary, GeoCoordinate};
use crate::ports::{Geolocator, SunTimeProvider};

/// Resolves the session's coordinate with a single request.
///
/// Falls back to [`GeoCoordinate::FALLBACK`] on any failure.
pub async fn resolve_location(geolocator: &dyn Geolocator) -> GeoCoordinate {
    match geolocator.locate().await {
        Ok(coordinate) => {
            info!(%coordinate, "location resolved");
            coordinate
        }
        Err(e) => {
            warn!(
                error = %e,
                fallback = %GeoCoordinate::FALLBACK,
                "geolocation failed; using fallback"
            );
            GeoCoordinate::FALLBACK
        }
    }
}

/// Resolves today's sunrise and sunset at `coordinate` with a single request.
///
/// "Today" is `local_now`'s calendar day in its own zone. Falls back to
/// 06:00-18:00 on that day on any failure.
pub async fn resolve_day_boundary<Tz: TimeZone>(
    provider: &dyn SunTimeProvider,
    coordinate: GeoCoordinate,
    local_now: &DateTime<Tz>,
) -> DayBoundary {
    let date = local_now.date_naive();
    match provider.sun_times(coordinate, date).await {
        Ok(boundary) => {
            if !boundary.is_well_ordered() {
                warn!(
                    sunrise = %boundary.sunrise,
                    sunset = %boundary.sunset,
                    "sunrise is not before sunset"
                );
            }
            info!(sunrise = %boundary.sunrise, sunset = %boundary.sunset, "sun times resolved");
            boundary
        }
        Err(e) => {
            let fallback = DayBoundary::fallback_on(local_now);
            warn!(error = %e, %date, "sun-time lookup failed; using 06:00-18:00");
            fallback
        }
    }
}
