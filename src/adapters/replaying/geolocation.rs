//! Replaying adapter for the `Geolocator` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::GEOLOCATION_PORT;
use crate::error::ClockError;
use crate::ports::{GeoFuture, Geolocator};

/// Serves recorded location lookups.
pub struct ReplayingGeolocator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGeolocator {
    /// Creates a replaying geolocator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl Geolocator for ReplayingGeolocator {
    fn locate(&self) -> GeoFuture<'_> {
        let result = next_output(&self.replayer, GEOLOCATION_PORT, "locate")
            .and_then(|output| replay_result(output, ClockError::Geolocation));
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::domain::GeoCoordinate;
    use chrono::Utc;
    use serde_json::json;

    fn geolocator(output: serde_json::Value) -> ReplayingGeolocator {
        ReplayingGeolocator::new(CassetteReplayer::new(&Cassette {
            name: "geo".into(),
            recorded_at: Utc::now(),
            recorded_by: "varclock test".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "geolocation".into(),
                method: "locate".into(),
                input: json!(null),
                output,
            }],
        }))
    }

    #[tokio::test]
    async fn replays_recorded_coordinate() {
        let geo = geolocator(json!({"Ok": {"latitude": 59.3293, "longitude": 18.0686}}));
        let coordinate = geo.locate().await.unwrap();
        assert_eq!(coordinate, GeoCoordinate::new(59.3293, 18.0686).unwrap());
    }

    #[tokio::test]
    async fn replays_recorded_failure() {
        let geo = geolocator(json!({"Err": "permission denied"}));
        let err = geo.locate().await.unwrap_err();
        assert!(matches!(err, ClockError::Geolocation(_)));
    }

    #[tokio::test]
    async fn second_lookup_exhausts_the_cassette() {
        let geo = geolocator(json!({"Err": "permission denied"}));
        let _ = geo.locate().await;
        assert!(matches!(geo.locate().await, Err(ClockError::Cassette(_))));
    }
}
