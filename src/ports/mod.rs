//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the clock core and an external
//! system (time, geolocation, sunrise/sunset lookup). Implementations live
//! in `src/adapters/`.

pub mod clock;
pub mod geolocation;
pub mod sun_times;

pub use clock::Clock;
pub use geolocation::{GeoFuture, Geolocator};
pub use sun_times::{SunTimeProvider, SunTimesFuture};
