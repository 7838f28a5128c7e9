//! `varclock sun`: show where the clock runs and today's day boundary.

use crate::context::ServiceContext;
use crate::domain::{DayBoundary, GeoCoordinate};
use crate::error::ClockError;
use crate::face::wall_clock;
use crate::session::{resolve_day_boundary, resolve_location};

/// Resolves and prints the coordinate, sunrise, sunset and day length.
///
/// # Errors
///
/// Never fails; lookups fall back to the default location and 06:00-18:00.
pub async fn run(ctx: ServiceContext) -> Result<(), ClockError> {
    let coordinate = resolve_location(ctx.geolocator.as_ref()).await;
    let local_now = ctx.clock.local_now();
    let boundary = resolve_day_boundary(ctx.sun_times.as_ref(), coordinate, &local_now).await;
    for line in render(coordinate, &boundary) {
        println!("{line}");
    }
    Ok(())
}

/// The printed lines, without trailing newlines.
#[must_use]
pub fn render(coordinate: GeoCoordinate, boundary: &DayBoundary) -> Vec<String> {
    let (sunrise, sunset) = (boundary.sunrise.as_millis(), boundary.sunset.as_millis());
    let minutes = sunset.saturating_sub(sunrise).div_euclid(60_000);
    vec![
        format!("location {coordinate}"),
        format!("sunrise  {}", wall_clock(boundary.sunrise)),
        format!("sunset   {}", wall_clock(boundary.sunset)),
        format!("daylight {}h {:02}m", minutes / 60, minutes % 60),
    ]
}
