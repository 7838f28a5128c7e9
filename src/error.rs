//! Error types for the variable-hour clock.
//!
//! Port adapters report failures through [`ClockError`]. The location and
//! sun-time resolvers absorb those failures into fallbacks, so in practice
//! only configuration, argument and cassette errors reach the binary.

use crate::session::state::{SessionEvent, SessionState};

/// Errors that can occur while resolving, computing or rendering clock time.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Command-line arguments were rejected; the message is clap's own.
    #[error("{0}")]
    Usage(String),

    /// An environment variable or CLI value could not be interpreted.
    #[error("configuration error: {0}")]
    Config(String),

    /// A latitude or longitude fell outside its valid range.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },

    /// A timestamp could not be parsed or is out of the representable range.
    #[error("invalid instant: {0}")]
    InvalidInstant(String),

    /// The geolocation source failed or refused the request.
    #[error("geolocation failed: {0}")]
    Geolocation(String),

    /// The sunrise/sunset lookup failed or returned a malformed payload.
    #[error("sun-time lookup failed: {0}")]
    SunTimes(String),

    /// A session event arrived in a state that cannot accept it.
    #[error("event {event:?} is not valid in state {state:?}")]
    InvalidTransition {
        /// State the session was in.
        state: SessionState,
        /// Event that was rejected.
        event: SessionEvent,
    },

    /// A cassette could not be read, written or interpreted.
    #[error("cassette error: {0}")]
    Cassette(String),

    /// The async runtime could not be started.
    #[error("runtime error: {0}")]
    Runtime(String),
}
