//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::clock::SystemClock;
use crate::adapters::live::geolocation::{FixedGeolocator, IpGeolocator};
use crate::adapters::live::http_client;
use crate::adapters::live::sun_times::SunriseSunsetClient;
use crate::adapters::recording::{RecordingClock, RecordingGeolocator, RecordingSunTimeProvider};
use crate::adapters::replaying::{ReplayingClock, ReplayingGeolocator, ReplayingSunTimeProvider};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::ports::{Clock, Geolocator, SunTimeProvider};

/// Bundles the ports a clock session talks to.
///
/// Ports are shared (`Arc`) because the resolution pipeline and the ticker
/// run as their own tasks.
#[derive(Clone)]
pub struct ServiceContext {
    /// Source of "now" for the ticker.
    pub clock: Arc<dyn Clock>,
    /// Location source.
    pub geolocator: Arc<dyn Geolocator>,
    /// Sunrise/sunset lookup.
    pub sun_times: Arc<dyn SunTimeProvider>,
}

impl ServiceContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        geolocator: Arc<dyn Geolocator>,
        sun_times: Arc<dyn SunTimeProvider>,
    ) -> Self {
        Self {
            clock,
            geolocator,
            sun_times,
        }
    }

    /// Creates a context talking to the system clock and the configured services.
    ///
    /// A configured coordinate replaces the IP geolocation lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn live(config: &ClockConfig) -> Result<Self, ClockError> {
        let client = http_client(config.http_timeout)?;
        let geolocator: Arc<dyn Geolocator> = match config.location {
            Some(coordinate) => Arc::new(FixedGeolocator::new(coordinate)),
            None => Arc::new(IpGeolocator::new(client.clone(), config.geo_api_url.clone())),
        };
        Ok(Self {
            clock: Arc::new(SystemClock),
            geolocator,
            sun_times: Arc::new(SunriseSunsetClient::new(client, config.sun_api_url.clone())),
        })
    }

    /// Creates a live context whose interactions are recorded under `base_dir`.
    ///
    /// Cassettes are written when the returned session is finished, after
    /// this context (and every clone of it) has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context or the recording directory cannot be created.
    pub fn recording_at(
        config: &ClockConfig,
        base_dir: &Path,
    ) -> Result<(Self, RecordingSession), ClockError> {
        let live = Self::live(config)?;
        let session = RecordingSession::new(base_dir)?;
        let ctx = Self {
            clock: Arc::new(RecordingClock::new(live.clock, Arc::clone(&session.clock))),
            geolocator: Arc::new(RecordingGeolocator::new(
                live.geolocator,
                Arc::clone(&session.geolocation),
            )),
            sun_times: Arc::new(RecordingSunTimeProvider::new(
                live.sun_times,
                Arc::clone(&session.sun_times),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a context serving every port from one monolithic cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, ClockError> {
        // Separate replayers keep the per-port streams independent.
        Ok(Self {
            clock: Arc::new(ReplayingClock::new(CassetteReplayer::load(path)?)),
            geolocator: Arc::new(ReplayingGeolocator::new(CassetteReplayer::load(path)?)),
            sun_times: Arc::new(ReplayingSunTimeProvider::new(CassetteReplayer::load(path)?)),
        })
    }

    /// Creates a context from per-port cassettes; ports without one go live.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be loaded or the live
    /// context cannot be built.
    pub fn replaying_from(
        cassettes: &CassetteConfig,
        config: &ClockConfig,
    ) -> Result<Self, ClockError> {
        let replayers = cassettes.load_all()?;
        let live = Self::live(config)?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Arc::new(ReplayingClock::new(r)),
                None => live.clock,
            },
            geolocator: match replayers.geolocation {
                Some(r) => Arc::new(ReplayingGeolocator::new(r)),
                None => live.geolocator,
            },
            sun_times: match replayers.sun_times {
                Some(r) => Arc::new(ReplayingSunTimeProvider::new(r)),
                None => live.sun_times,
            },
        })
    }
}
