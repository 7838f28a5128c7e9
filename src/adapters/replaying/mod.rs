//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod geolocation;
pub mod sun_times;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::ClockError;

pub use clock::ReplayingClock;
pub use geolocation::ReplayingGeolocator;
pub use sun_times::ReplayingSunTimeProvider;

/// Take the next recorded output for `port`/`method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ClockError> {
    let mut guard = replayer
        .lock()
        .map_err(|_| ClockError::Cassette(format!("{port} replayer lock poisoned")))?;
    guard
        .next_interaction(port, method)
        .map(|interaction| interaction.output)
}

/// Decode a recorded `{"Ok": v}` / `{"Err": message}` output.
///
/// A recorded `Err` is rebuilt with `port_error`, so replayed failures look
/// like the live ones to the caller.
pub(crate) fn replay_result<T>(
    output: serde_json::Value,
    port_error: fn(String) -> ClockError,
) -> Result<T, ClockError>
where
    T: DeserializeOwned,
{
    if let Some(message) = output.get("Err") {
        let message = message
            .as_str()
            .map_or_else(|| message.to_string(), str::to_owned);
        return Err(port_error(message));
    }
    let value = output
        .get("Ok")
        .cloned()
        .ok_or_else(|| ClockError::Cassette(format!("output is neither Ok nor Err: {output}")))?;
    serde_json::from_value(value)
        .map_err(|e| ClockError::Cassette(format!("failed to decode recorded value: {e}")))
}
