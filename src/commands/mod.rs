//! Command dispatch and handlers.

pub mod compute;
pub mod now;
pub mod sun;
pub mod watch;

use std::future::Future;
use std::io::Write;
use std::path::Path;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::{Command, LocationArgs};
use crate::config::ClockConfig;
use crate::context::ServiceContext;
use crate::domain::Instant;
use crate::error::ClockError;
use crate::face::Frame;
use crate::session::FrameSink;

/// Dispatch a parsed command to its handler.
///
/// `VARCLOCK_REPLAY` serves the ports from a cassette file, or from the
/// per-port cassettes in a directory. Otherwise, when `VARCLOCK_RECORD` is
/// set, live interactions are recorded to per-port cassettes under it.
///
/// # Errors
///
/// Returns an error for invalid configuration, unreadable cassettes or a
/// failed command.
pub fn dispatch(command: &Command) -> Result<(), ClockError> {
    match command {
        Command::Compute {
            now,
            sunrise,
            sunset,
        } => compute::run(*now, *sunrise, *sunset),
        Command::Now { location } => with_context(ClockConfig::from_env()?, location, now::run),
        Command::Watch { ticks, location } => {
            let ticks = *ticks;
            let config = ClockConfig::from_env()?;
            with_context(config, location, |ctx| watch::run(ctx, ticks))
        }
        Command::Sun { location } => with_context(ClockConfig::from_env()?, location, sun::run),
    }
}

/// Builds the service context for `config` and drives `handler` to completion
/// on a single-threaded runtime.
fn with_context<F, Fut>(
    config: ClockConfig,
    location: &LocationArgs,
    handler: F,
) -> Result<(), ClockError>
where
    F: FnOnce(ServiceContext) -> Fut,
    Fut: Future<Output = Result<(), ClockError>>,
{
    let config = config.with_location_override(location.lat, location.lng)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ClockError::Runtime(e.to_string()))?;

    let (ctx, session) = if let Some(path) = &config.replay_cassette {
        (replay_context(path, &config)?, None)
    } else if let Some(dir) = &config.record_dir {
        let (ctx, session) = ServiceContext::recording_at(&config, dir)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    let result = runtime.block_on(handler(ctx));

    // In-flight lookups hold recorder handles until their tasks are gone.
    drop(runtime);
    if let Some(session) = session {
        finish_recording(session)?;
    }

    result
}

fn replay_context(path: &Path, config: &ClockConfig) -> Result<ServiceContext, ClockError> {
    if path.is_dir() {
        ServiceContext::replaying_from(&CassetteConfig::from_dir(path), config)
    } else {
        ServiceContext::replaying(path)
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), ClockError> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

/// Writes frames to stdout, separated by blank lines.
#[derive(Debug, Default)]
pub struct StdoutSink {
    announced_loading: bool,
    frames: u64,
}

impl FrameSink for StdoutSink {
    fn loading(&mut self, _now: Instant) {
        if !self.announced_loading {
            self.announced_loading = true;
            eprintln!("Resolving location and sun times...");
        }
    }

    fn frame(&mut self, frame: &Frame) {
        let mut out = std::io::stdout().lock();
        if self.frames > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{frame}");
        let _ = out.flush();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoCoordinate;

    #[test]
    fn compute_needs_no_context() {
        let command = Command::Compute {
            now: "2024-06-15T09:00:00Z".parse().unwrap(),
            sunrise: "2024-06-15T06:00:00Z".parse().unwrap(),
            sunset: "2024-06-15T18:00:00Z".parse().unwrap(),
        };
        assert!(dispatch(&command).is_ok());
    }

    #[test]
    fn half_a_location_override_is_rejected() {
        let location = LocationArgs {
            lat: Some(10.0),
            lng: None,
        };
        let result = with_context(ClockConfig::default(), &location, |_| async { Ok(()) });
        assert!(matches!(result, Err(ClockError::Config(_))));
    }

    #[test]
    fn missing_replay_cassette_is_an_error() {
        let config = ClockConfig {
            replay_cassette: Some("/nonexistent/varclock.cassette.yaml".into()),
            ..ClockConfig::default()
        };
        let result = with_context(config, &LocationArgs::default(), |_| async { Ok(()) });
        assert!(matches!(result, Err(ClockError::Cassette(_))));
    }

    #[test]
    fn handler_runs_inside_the_runtime() {
        let config = ClockConfig {
            location: Some(GeoCoordinate::FALLBACK),
            ..ClockConfig::default()
        };
        let result = with_context(config, &LocationArgs::default(), |ctx| async move {
            let coordinate = ctx.geolocator.locate().await?;
            assert_eq!(coordinate, GeoCoordinate::FALLBACK);
            tokio::task::yield_now().await;
            Ok(())
        });
        assert!(result.is_ok());
    }
}
