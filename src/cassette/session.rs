//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use super::{CLOCK_PORT, GEOLOCATION_PORT, SUN_TIMES_PORT};
use crate::error::ClockError;

/// One recorder per port, all writing into a timestamped directory.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for geolocation interactions.
    pub geolocation: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for sun-time interactions.
    pub sun_times: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Start a session writing to `base_dir/<timestamp>/<port>.cassette.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] if the timestamped directory already
    /// exists or cannot be created.
    pub fn new(base_dir: &Path) -> Result<Self, ClockError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base_dir.join(&timestamp);

        if output_dir.exists() {
            return Err(ClockError::Cassette(format!(
                "cassette directory already exists: {}",
                output_dir.display()
            )));
        }
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            ClockError::Cassette(format!("failed to create {}: {e}", output_dir.display()))
        })?;

        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: make_recorder(CLOCK_PORT),
            geolocation: make_recorder(GEOLOCATION_PORT),
            sun_times: make_recorder(SUN_TIMES_PORT),
            output_dir,
        })
    }

    /// Directory the cassettes are written into.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write every port's cassette and return the output directory.
    ///
    /// All recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] if an adapter still holds a recorder
    /// or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, ClockError> {
        fn finish_one(
            recorder: Arc<Mutex<CassetteRecorder>>,
            port: &str,
        ) -> Result<(), ClockError> {
            let recorder = Arc::try_unwrap(recorder)
                .map_err(|_| ClockError::Cassette(format!("{port} recorder still in use")))?
                .into_inner()
                .map_err(|e| ClockError::Cassette(format!("{port} recorder lock poisoned: {e}")))?;
            recorder.finish().map(|_| ())
        }

        finish_one(self.clock, CLOCK_PORT)?;
        finish_one(self.geolocation, GEOLOCATION_PORT)?;
        finish_one(self.sun_times, SUN_TIMES_PORT)?;
        Ok(self.output_dir)
    }
}
