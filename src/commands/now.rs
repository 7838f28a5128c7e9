//! `varclock now`: resolve once and print a single frame.

use crate::context::ServiceContext;
use crate::error::ClockError;
use crate::session::ClockSession;

use super::StdoutSink;

/// Prints the first frame rendered once location and sun times are known.
///
/// # Errors
///
/// Returns [`ClockError::Runtime`] if the session stops before it is ready.
pub async fn run(ctx: ServiceContext) -> Result<(), ClockError> {
    let mut sink = StdoutSink::default();
    let summary = ClockSession::new(ctx).run(Some(1), &mut sink).await;
    if summary.frames == 0 {
        return Err(ClockError::Runtime("clock stopped before rendering a frame".to_owned()));
    }
    Ok(())
}
