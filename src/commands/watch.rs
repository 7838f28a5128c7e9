//! `varclock watch`: print a frame every second.

use crate::context::ServiceContext;
use crate::error::ClockError;
use crate::session::ClockSession;

use super::StdoutSink;

/// Runs the clock, printing `ticks` frames or until interrupted when `None`.
///
/// # Errors
///
/// Never fails once the context exists; the signature matches the other handlers.
pub async fn run(ctx: ServiceContext, ticks: Option<u64>) -> Result<(), ClockError> {
    let mut sink = StdoutSink::default();
    let summary = ClockSession::new(ctx).run(ticks, &mut sink).await;
    tracing::debug!(frames = summary.frames, "watch finished");
    Ok(())
}
