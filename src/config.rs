//! Runtime configuration.
//!
//! All configuration comes from environment variables (a `.env` file is
//! loaded first by the binary). CLI flags may override the coordinate.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::GeoCoordinate;
use crate::error::ClockError;

/// Default sunrise/sunset service.
pub const DEFAULT_SUN_API_URL: &str = "https://api.sunrise-sunset.org/json";
/// Default IP geolocation service.
pub const DEFAULT_GEO_API_URL: &str = "http://ip-api.com/json/";
/// Default timeout for each outbound HTTP request.
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Complete clock configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    /// Base URL of the sunrise/sunset service.
    pub sun_api_url: String,
    /// URL of the IP geolocation service.
    pub geo_api_url: String,
    /// Per-request timeout for both services.
    pub http_timeout: Duration,
    /// Fixed coordinate; when set, no geolocation request is made.
    pub location: Option<GeoCoordinate>,
    /// Directory to record per-port cassettes into.
    pub record_dir: Option<PathBuf>,
    /// Cassette file to replay all ports from.
    pub replay_cassette: Option<PathBuf>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            sun_api_url: DEFAULT_SUN_API_URL.to_owned(),
            geo_api_url: DEFAULT_GEO_API_URL.to_owned(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            location: None,
            record_dir: None,
            replay_cassette: None,
        }
    }
}

impl ClockConfig {
    /// Load configuration from the process environment.
    ///
    /// Optional variables:
    /// - `VARCLOCK_SUN_API_URL` -- sunrise/sunset service (default [`DEFAULT_SUN_API_URL`])
    /// - `VARCLOCK_GEO_API_URL` -- IP geolocation service (default [`DEFAULT_GEO_API_URL`])
    /// - `VARCLOCK_HTTP_TIMEOUT_MS` -- request timeout in milliseconds (default 10000)
    /// - `VARCLOCK_LATITUDE` / `VARCLOCK_LONGITUDE` -- fixed coordinate, both or neither
    /// - `VARCLOCK_RECORD` -- directory to record cassettes into
    /// - `VARCLOCK_REPLAY` -- cassette file to replay
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Config`] for unparsable values or a half-specified
    /// coordinate, and [`ClockError::InvalidCoordinate`] for out-of-range ones.
    pub fn from_env() -> Result<Self, ClockError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClockConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClockError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_timeout = match lookup("VARCLOCK_HTTP_TIMEOUT_MS") {
            Some(raw) => {
                let millis = raw.trim().parse().map_err(|e| {
                    ClockError::Config(format!("invalid VARCLOCK_HTTP_TIMEOUT_MS: {e}"))
                })?;
                Duration::from_millis(millis)
            }
            None => defaults.http_timeout,
        };

        let latitude = parse_degrees(&lookup, "VARCLOCK_LATITUDE")?;
        let longitude = parse_degrees(&lookup, "VARCLOCK_LONGITUDE")?;
        let location = coordinate_from_parts(latitude, longitude)?;

        Ok(Self {
            sun_api_url: lookup("VARCLOCK_SUN_API_URL").unwrap_or(defaults.sun_api_url),
            geo_api_url: lookup("VARCLOCK_GEO_API_URL").unwrap_or(defaults.geo_api_url),
            http_timeout,
            location,
            record_dir: lookup("VARCLOCK_RECORD").map(PathBuf::from),
            replay_cassette: lookup("VARCLOCK_REPLAY").map(PathBuf::from),
        })
    }

    /// Replaces the configured coordinate when both parts are given.
    ///
    /// # Errors
    ///
    /// Returns an error when exactly one part is given or the pair is out of range.
    pub fn with_location_override(
        mut self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, ClockError> {
        if let Some(coordinate) = coordinate_from_parts(latitude, longitude)? {
            self.location = Some(coordinate);
        }
        Ok(self)
    }
}

fn parse_degrees<F>(lookup: &F, key: &str) -> Result<Option<f64>, ClockError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|e| ClockError::Config(format!("invalid {key}: {e}")))
        })
        .transpose()
}

fn coordinate_from_parts(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<GeoCoordinate>, ClockError> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => GeoCoordinate::new(lat, lng).map(Some),
        (None, None) => Ok(None),
        _ => Err(ClockError::Config("latitude and longitude must be given together".to_owned())),
    }
}
