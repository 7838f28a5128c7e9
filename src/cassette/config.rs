//! Per-port cassette selection for replay.

use std::path::PathBuf;

use super::replayer::CassetteReplayer;
use crate::error::ClockError;

/// Cassette file for each port. A port without one is served by a live
/// adapter when replaying (see `ServiceContext::replaying_from`).
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clock port.
    pub clock: Option<PathBuf>,
    /// Cassette for the geolocation port.
    pub geolocation: Option<PathBuf>,
    /// Cassette for the sun-times port.
    pub sun_times: Option<PathBuf>,
}

/// Replayers loaded from a [`CassetteConfig`].
#[derive(Debug)]
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the geolocation port.
    pub geolocation: Option<CassetteReplayer>,
    /// Replayer for the sun-times port.
    pub sun_times: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Uses `dir/<port>.cassette.yaml` for every port whose file exists.
    #[must_use]
    pub fn from_dir(dir: &std::path::Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self {
            clock: existing(super::CLOCK_PORT),
            geolocation: existing(super::GEOLOCATION_PORT),
            sun_times: existing(super::SUN_TIMES_PORT),
        }
    }

    /// Load every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] if any configured file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, ClockError> {
        let load = |path: &Option<PathBuf>| path.as_deref().map(CassetteReplayer::load).transpose();
        Ok(PortReplayers {
            clock: load(&self.clock)?,
            geolocation: load(&self.geolocation)?,
            sun_times: load(&self.sun_times)?,
        })
    }
}
