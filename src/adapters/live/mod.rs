//! Live adapters for real external interactions.

pub mod clock;
pub mod geolocation;
pub mod sun_times;

use std::time::Duration;

use reqwest::Client;

use crate::error::ClockError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by the live network adapters.
///
/// # Errors
///
/// Returns [`ClockError::Config`] if the TLS backend cannot be initialised.
pub fn http_client(timeout: Duration) -> Result<Client, ClockError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ClockError::Config(format!("failed to build HTTP client: {e}")))
}
