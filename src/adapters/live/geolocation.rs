//! Live adapters for the `Geolocator` port.

use reqwest::Client;
use serde::Deserialize;

use crate::domain::GeoCoordinate;
use crate::error::ClockError;
use crate::ports::geolocation::{GeoFuture, Geolocator};

/// Geolocator that always reports a preconfigured coordinate.
pub struct FixedGeolocator {
    coordinate: GeoCoordinate,
}

impl FixedGeolocator {
    /// Creates a geolocator pinned to `coordinate`.
    #[must_use]
    pub const fn new(coordinate: GeoCoordinate) -> Self {
        Self { coordinate }
    }
}

impl Geolocator for FixedGeolocator {
    fn locate(&self) -> GeoFuture<'_> {
        let coordinate = self.coordinate;
        Box::pin(async move { Ok(coordinate) })
    }
}

/// Geolocator that derives the coordinate from the public IP address.
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    /// Creates an IP geolocator querying `url`.
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Response body of an ip-api style lookup.
#[derive(Deserialize)]
struct IpLocation {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Extracts a coordinate from an IP geolocation response body.
///
/// # Errors
///
/// Returns [`ClockError::Geolocation`] for malformed bodies or refused lookups
/// and [`ClockError::InvalidCoordinate`] for out-of-range positions.
pub fn parse_ip_location(body: &str) -> Result<GeoCoordinate, ClockError> {
    let location: IpLocation = serde_json::from_str(body)
        .map_err(|e| ClockError::Geolocation(format!("malformed response: {e}")))?;

    if location.status != "success" {
        let reason = location.message.unwrap_or(location.status);
        return Err(ClockError::Geolocation(format!("lookup refused: {reason}")));
    }

    match (location.lat, location.lon) {
        (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon),
        _ => Err(ClockError::Geolocation("response has no lat/lon".to_owned())),
    }
}

impl Geolocator for IpGeolocator {
    fn locate(&self) -> GeoFuture<'_> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .query(&[("fields", "status,message,lat,lon")])
                .send()
                .await
                .map_err(|e| ClockError::Geolocation(format!("request failed: {e}")))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClockError::Geolocation(format!("failed to read response: {e}")))?;

            if !status.is_success() {
                return Err(ClockError::Geolocation(format!("HTTP {}", status.as_u16())));
            }

            parse_ip_location(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::live::http_client;

    #[tokio::test]
    async fn fixed_geolocator_reports_its_coordinate() {
        let coordinate = GeoCoordinate::new(35.6762, 139.6503).unwrap();
        let located = FixedGeolocator::new(coordinate).locate().await.unwrap();
        assert_eq!(located, coordinate);
    }

    #[test]
    fn parses_successful_lookup() {
        let body = r#"{"status":"success","lat":52.52,"lon":13.405}"#;
        let coordinate = parse_ip_location(body).unwrap();
        assert_eq!(coordinate, GeoCoordinate::new(52.52, 13.405).unwrap());
    }

    #[test]
    fn refused_lookup_carries_service_message() {
        let body = r#"{"status":"fail","message":"private range"}"#;
        let err = parse_ip_location(body).unwrap_err();
        assert!(err.to_string().contains("private range"));
    }

    #[test]
    fn missing_position_is_an_error() {
        let err = parse_ip_location(r#"{"status":"success"}"#).unwrap_err();
        assert!(matches!(err, ClockError::Geolocation(_)));
    }

    #[test]
    fn out_of_range_position_is_an_error() {
        let err = parse_ip_location(r#"{"status":"success","lat":91.0,"lon":0.0}"#).unwrap_err();
        assert!(matches!(err, ClockError::InvalidCoordinate { .. }));
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let client = http_client(Duration::from_millis(200)).unwrap();
        let geolocator = IpGeolocator::new(client, "http://127.0.0.1:9/json/");
        assert!(geolocator.locate().await.is_err());
    }
}
