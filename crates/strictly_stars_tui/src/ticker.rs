//! Once-per-second tick scheduling with explicit cancellation.
//!
//! The [`Ticker`] owns the only task that produces ticks. Arming it starts a
//! new epoch and disarming aborts the task, so a tick is only ever accepted
//! when it belongs to the epoch currently armed.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior, interval_at};
use tracing::{debug, instrument};

/// Generation of the tick schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("epoch {_0}")]
pub struct Epoch(u64);

/// Cancellable periodic tick source.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    tx: UnboundedSender<Epoch>,
    epoch: Epoch,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Creates a disarmed ticker that will send on `tx` every `period`.
    pub fn new(period: Duration, tx: UnboundedSender<Epoch>) -> Self {
        Self {
            period,
            tx,
            epoch: Epoch(0),
            handle: None,
        }
    }

    /// Starts a fresh schedule, cancelling any previous one.
    ///
    /// The first tick fires one full period from now. Must be called from
    /// within a tokio runtime.
    #[instrument(skip(self))]
    pub fn arm(&mut self) -> Epoch {
        self.disarm();
        let epoch = self.epoch;
        let period = self.period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(epoch).is_err() {
                    break;
                }
            }
        }));
        debug!(%epoch, "Ticker armed");
        epoch
    }

    /// Cancels the schedule; ticks already queued become stale.
    #[instrument(skip(self))]
    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(epoch = %self.epoch, "Ticker disarmed");
        }
        self.epoch = Epoch(self.epoch.0 + 1);
    }

    /// Returns true while a schedule is running.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if a tick from `epoch` belongs to the running schedule.
    pub fn accepts(&self, epoch: Epoch) -> bool {
        self.is_armed() && epoch == self.epoch
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
