//! Recording adapter for the `Geolocator` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::GEOLOCATION_PORT;
use crate::ports::{GeoFuture, Geolocator};

/// Records location lookups while delegating to an inner geolocator.
pub struct RecordingGeolocator {
    inner: Arc<dyn Geolocator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGeolocator {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Arc<dyn Geolocator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Geolocator for RecordingGeolocator {
    fn locate(&self) -> GeoFuture<'_> {
        Box::pin(async move {
            let result = self.inner.locate().await;
            record_result(&self.recorder, GEOLOCATION_PORT, "locate", &(), &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::geolocation::FixedGeolocator;
    use crate::cassette::replayer::CassetteReplayer;
    use crate::domain::GeoCoordinate;

    #[tokio::test]
    async fn recorded_location_replays() {
        let path = std::env::temp_dir().join("varclock_rec_geo.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "geo")));
        let coordinate = GeoCoordinate::new(-1.2921, 36.8219).unwrap();

        let geolocator = RecordingGeolocator::new(
            Arc::new(FixedGeolocator::new(coordinate)),
            Arc::clone(&recorder),
        );
        assert_eq!(geolocator.locate().await.unwrap(), coordinate);
        drop(geolocator);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let mut replayer = CassetteReplayer::load(&path).unwrap();
        let interaction = replayer
            .next_interaction(GEOLOCATION_PORT, "locate")
            .unwrap();
        assert_eq!(
            interaction.output["Ok"]["latitude"],
            serde_json::json!(-1.2921)
        );

        let _ = std::fs::remove_file(&path);
    }
}
