//! Cassettes: recorded port interactions for deterministic replay.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

/// Port name of the clock in cassettes.
pub const CLOCK_PORT: &str = "clock";
/// Port name of the geolocator in cassettes.
pub const GEOLOCATION_PORT: &str = "geolocation";
/// Port name of the sun-time provider in cassettes.
pub const SUN_TIMES_PORT: &str = "sun_times";
