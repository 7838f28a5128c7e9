//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::CLOCK_PORT;
use crate::ports::Clock;

/// Records every reading of an inner clock.
pub struct RecordingClock {
    inner: Arc<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Arc<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        record_interaction(&self.recorder, CLOCK_PORT, "now", &(), &now);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::clock::SystemClock;

    #[test]
    fn records_each_reading() {
        let path = std::env::temp_dir().join("varclock_rec_clock.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "clock")));

        let clock = RecordingClock::new(Arc::new(SystemClock), Arc::clone(&recorder));
        let _ = clock.now();
        let _ = clock.now();

        let guard = recorder.lock().unwrap();
        assert_eq!(guard.len(), 2);
        drop(guard);
        drop(clock);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("port: clock"));
        assert!(content.contains("method: now"));

        let _ = std::fs::remove_file(&path);
    }
}
