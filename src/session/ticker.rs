//! Once-per-second tick source.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::trace;

use crate::domain::Instant;
use crate::ports::Clock;

/// Interval between ticks of a running clock.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// A running timer that delivers the clock's "now" once per period.
///
/// The first tick is delivered immediately. Ticks missed while the consumer
/// is busy are skipped, not delivered in a burst. The timer task is owned by
/// this value: [`Ticker::stop`] or dropping the ticker cancels it, and no
/// tick is delivered afterwards.
pub struct Ticker {
    ticks: mpsc::Receiver<Instant>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Starts ticking on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, or with a zero `period`.
    #[must_use]
    pub fn start(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let (tx, ticks) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            loop {
                interval.tick().await;
                let now = clock.instant();
                trace!(%now, "tick");
                if tx.send(now).await.is_err() {
                    break;
                }
            }
        });
        Self { ticks, task }
    }

    /// Waits for the next tick; `None` once the ticker has stopped.
    pub async fn next(&mut self) -> Option<Instant> {
        self.ticks.recv().await
    }

    /// Cancels the timer and discards any tick not yet taken.
    pub fn stop(&mut self) {
        self.task.abort();
        self.ticks.close();
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
