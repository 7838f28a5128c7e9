//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};
use crate::error::ClockError;

const RECORDED_BY: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Accumulates interactions and writes them out as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            interactions: Vec::new(),
        }
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Append an interaction; its `seq` is its position in the recording.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Write the cassette to disk and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] if serialisation or the write fails.
    pub fn finish(self) -> Result<PathBuf, ClockError> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            recorded_by: RECORDED_BY.to_owned(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette)
            .map_err(|e| ClockError::Cassette(format!("failed to serialise cassette: {e}")))?;
        std::fs::write(&self.path, yaml).map_err(|e| {
            ClockError::Cassette(format!("failed to write {}: {e}", self.path.display()))
        })?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_interactions_and_writes_yaml() {
        let dir = std::env::temp_dir().join("varclock_recorder_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "morning");
        assert!(recorder.is_empty());
        recorder.record("clock", "now", json!(null), json!("2024-06-15T06:30:00Z"));
        recorder.record(
            "geolocation",
            "locate",
            json!(null),
            json!({"Err": "denied"}),
        );
        assert_eq!(recorder.len(), 2);

        let written = recorder.finish().unwrap();
        assert_eq!(written, path);

        let yaml = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(cassette.name, "morning");
        assert!(cassette.recorded_by.starts_with("varclock "));
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(cassette.interactions[1].port, "geolocation");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn finish_into_missing_directory_fails() {
        let recorder =
            CassetteRecorder::new("/nonexistent/varclock/dir/x.cassette.yaml", "unwritable");
        assert!(matches!(recorder.finish(), Err(ClockError::Cassette(_))));
    }
}
