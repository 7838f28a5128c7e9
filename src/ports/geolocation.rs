//! Geolocation port for obtaining the user's coordinate.

use std::future::Future;
use std::pin::Pin;

use crate::domain::GeoCoordinate;
use crate::error::ClockError;

/// Boxed future type alias used by [`Geolocator`] to keep the trait dyn-compatible.
pub type GeoFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GeoCoordinate, ClockError>> + Send + 'a>>;

/// Resolves the coordinate the clock is running at.
pub trait Geolocator: Send + Sync {
    /// Performs a single location request.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is unavailable (network failure,
    /// refusal by the service, timeout, out-of-range coordinate).
    fn locate(&self) -> GeoFuture<'_>;
}
