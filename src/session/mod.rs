//! A running clock: resolution pipeline, tick source and state machine.
//!
//! ```text
//! Geolocator --> SunTimeProvider --> SessionState <-- Ticker
//!                                         |
//!                                     FrameSink
//! ```
//!
//! Location and sun times are resolved once, in order, by one spawned task
//! that reports [`SessionEvent`]s. The ticker runs independently; ticks that
//! arrive before the session is ready are reported as loading.

pub mod resolver;
pub mod state;
pub mod ticker;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::context::ServiceContext;
use crate::domain::Instant;
use crate::error::ClockError;
use crate::face::Frame;

pub use resolver::{resolve_day_boundary, resolve_location};
pub use state::{SessionEvent, SessionState};
pub use ticker::{Ticker, TICK_INTERVAL};

/// Receives what a session has to show.
pub trait FrameSink {
    /// Called for each tick delivered before the session is ready.
    fn loading(&mut self, _now: Instant) {}

    /// Called once when the session becomes ready.
    fn ready(&mut self, _state: &SessionState) {}

    /// Called for each tick once the session is ready.
    fn frame(&mut self, frame: &Frame);
}

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Identifier attached to the session's log span.
    pub id: Uuid,
    /// Final state.
    pub state: SessionState,
    /// Ticks spent loading.
    pub loading_ticks: u64,
    /// Frames handed to the sink.
    pub frames: u64,
}

/// Spawns the one-shot resolution pipeline.
///
/// The coordinate is resolved first, then today's sun times for it. Each
/// result is sent on `events`; if the receiver is gone (the session ended)
/// the result is dropped.
pub fn spawn_resolution(
    ctx: &ServiceContext,
    events: mpsc::Sender<SessionEvent>,
) -> JoinHandle<()> {
    let geolocator = ctx.geolocator.clone();
    let sun_times = ctx.sun_times.clone();
    let clock = ctx.clock.clone();

    tokio::spawn(
        async move {
            let coordinate = resolve_location(geolocator.as_ref()).await;
            let event = SessionEvent::LocationResolved(coordinate);
            if events.send(event).await.is_err() {
                debug!("session ended before location resolved; dropping result");
                return;
            }

            let local_now = clock.local_now();
            let boundary = resolve_day_boundary(sun_times.as_ref(), coordinate, &local_now).await;
            let event = SessionEvent::SunTimesResolved(boundary);
            if events.send(event).await.is_err() {
                debug!("session ended before sun times resolved; dropping result");
            }
        }
        .in_current_span(),
    )
}

/// One run of the clock from start-up to teardown.
pub struct ClockSession {
    ctx: ServiceContext,
    tick_interval: Duration,
}

impl ClockSession {
    /// Creates a session ticking once per second.
    #[must_use]
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Overrides the tick period.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Config`] for a zero period.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Result<Self, ClockError> {
        if tick_interval.is_zero() {
            return Err(ClockError::Config("tick interval must be non-zero".to_owned()));
        }
        self.tick_interval = tick_interval;
        Ok(self)
    }

    /// Runs until `frame_limit` frames have been rendered, or forever when `None`.
    ///
    /// Must be called inside a tokio runtime. The ticker is stopped before
    /// returning; a resolution still in flight is left to finish and its
    /// result ignored.
    pub async fn run<S: FrameSink>(
        &self,
        frame_limit: Option<u64>,
        sink: &mut S,
    ) -> SessionSummary {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("session", %id);
        self.run_inner(id, frame_limit, sink).instrument(span).await
    }

    async fn run_inner<S: FrameSink>(
        &self,
        id: Uuid,
        frame_limit: Option<u64>,
        sink: &mut S,
    ) -> SessionSummary {
        let mut summary = SessionSummary {
            id,
            state: SessionState::Initializing,
            loading_ticks: 0,
            frames: 0,
        };
        if frame_limit == Some(0) {
            return summary;
        }

        let (events_tx, mut events) = mpsc::channel(2);
        let _resolution = spawn_resolution(&self.ctx, events_tx);
        let mut ticker = Ticker::start(self.ctx.clock.clone(), self.tick_interval);
        let mut events_open = true;
        info!("clock session started");

        loop {
            tokio::select! {
                // State changes land before a tick that is ready at the same time.
                biased;
                event = events.recv(), if events_open => match event {
                    Some(event) => match summary.state.transition(event) {
                        Ok(next) => {
                            summary.state = next;
                            if !next.is_loading() {
                                sink.ready(&next);
                            }
                        }
                        Err(e) => warn!(error = %e, "ignoring session event"),
                    },
                    None => events_open = false,
                },
                tick = ticker.next() => {
                    let Some(now) = tick else { break };
                    match (summary.state, summary.state.time_of_day(now)) {
                        (SessionState::Ready { coordinate, boundary }, Some(time)) => {
                            sink.frame(&Frame::new(now, time, boundary, coordinate));
                            summary.frames += 1;
                            if frame_limit.is_some_and(|limit| summary.frames >= limit) {
                                break;
                            }
                        }
                        _ => {
                            summary.loading_ticks += 1;
                            sink.loading(now);
                        }
                    }
                }
            }
        }

        ticker.stop();
        info!(
            frames = summary.frames,
            loading_ticks = summary.loading_ticks,
            "clock session stopped"
        );
        summary
    }
}
