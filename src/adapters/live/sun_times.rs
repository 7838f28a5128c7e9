//! Live adapter for the `SunTimeProvider` port using the sunrise-sunset.org API.

use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{DayBoundary, GeoCoordinate, Instant};
use crate::error::ClockError;
use crate::ports::sun_times::{SunTimeProvider, SunTimesFuture};

/// Sun-time provider that queries a sunrise-sunset.org compatible service.
pub struct SunriseSunsetClient {
    client: Client,
    url: String,
}

impl SunriseSunsetClient {
    /// Creates a client querying `url`.
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Top-level response from the sunrise/sunset service.
#[derive(Deserialize)]
struct SunResponse {
    results: SunResults,
    status: String,
}

/// The `results` object; other fields (day length, twilight) are ignored.
#[derive(Deserialize)]
struct SunResults {
    sunrise: Timestamp,
    sunset: Timestamp,
}

/// Timestamps arrive as RFC 3339 with `formatted=0`, or as unix seconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Unix(i64),
    Text(String),
}

impl Timestamp {
    fn to_instant(&self) -> Result<Instant, ClockError> {
        match self {
            Self::Unix(secs) => secs
                .checked_mul(1000)
                .map(Instant::from_millis)
                .ok_or_else(|| ClockError::SunTimes(format!("timestamp {secs} out of range"))),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(Instant::from)
                .map_err(|e| ClockError::SunTimes(format!("bad timestamp {text:?}: {e}"))),
        }
    }
}

/// Extracts the day boundary from a sunrise/sunset response body.
///
/// # Errors
///
/// Returns [`ClockError::SunTimes`] for malformed bodies, unparsable
/// timestamps or a status other than `OK`.
pub fn parse_sun_times(body: &str) -> Result<DayBoundary, ClockError> {
    let response: SunResponse = serde_json::from_str(body)
        .map_err(|e| ClockError::SunTimes(format!("malformed response: {e}")))?;

    if response.status != "OK" {
        return Err(ClockError::SunTimes(format!("service status {}", response.status)));
    }

    let sunrise = response.results.sunrise.to_instant()?;
    let sunset = response.results.sunset.to_instant()?;
    Ok(DayBoundary::new(sunrise, sunset))
}

impl SunTimeProvider for SunriseSunsetClient {
    fn sun_times(&self, coordinate: GeoCoordinate, date: NaiveDate) -> SunTimesFuture<'_> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .query(&[
                    ("lat", coordinate.latitude().to_string()),
                    ("lng", coordinate.longitude().to_string()),
                    ("date", date.format("%Y-%m-%d").to_string()),
                    ("formatted", "0".to_owned()),
                ])
                .send()
                .await
                .map_err(|e| ClockError::SunTimes(format!("request failed: {e}")))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ClockError::SunTimes(format!("failed to read response: {e}")))?;

            if !status.is_success() {
                return Err(ClockError::SunTimes(format!("HTTP {}", status.as_u16())));
            }

            parse_sun_times(&body)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::live::http_client;

    #[test]
    fn parses_iso_timestamps() {
        let body = r#"{
            "results": {
                "sunrise": "2024-06-15T09:25:09+00:00",
                "sunset": "2024-06-16T00:30:53+00:00",
                "day_length": 54344
            },
            "status": "OK",
            "tzid": "UTC"
        }"#;
        let boundary = parse_sun_times(body).unwrap();
        assert_eq!(boundary.sunrise, "2024-06-15T09:25:09Z".parse().unwrap());
        assert_eq!(boundary.sunset, "2024-06-16T00:30:53Z".parse().unwrap());
    }

    #[test]
    fn parses_unix_seconds() {
        let body = r#"{"results":{"sunrise":1718443509,"sunset":1718497853},"status":"OK"}"#;
        let boundary = parse_sun_times(body).unwrap();
        assert_eq!(boundary.sunrise, Instant::from_millis(1_718_443_509_000));
        assert_eq!(boundary.sunset, Instant::from_millis(1_718_497_853_000));
    }

    #[test]
    fn rejects_non_ok_status() {
        let body = r#"{"results":{"sunrise":0,"sunset":0},"status":"INVALID_REQUEST"}"#;
        let err = parse_sun_times(body).unwrap_err();
        assert!(err.to_string().contains("INVALID_REQUEST"));
    }

    #[test]
    fn rejects_missing_results() {
        let err = parse_sun_times(r#"{"status":"OK"}"#).unwrap_err();
        assert!(matches!(err, ClockError::SunTimes(_)));
    }

    #[test]
    fn rejects_unparsable_timestamp() {
        let body = r#"{"results":{"sunrise":"5:05:35 AM","sunset":"7:21:52 PM"},"status":"OK"}"#;
        assert!(parse_sun_times(body).is_err());
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let client = http_client(Duration::from_millis(200)).unwrap();
        let provider = SunriseSunsetClient::new(client, "http://127.0.0.1:9/json");
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let result = provider.sun_times(GeoCoordinate::FALLBACK, date).await;
        assert!(result.is_err());
    }
}
