//! Controller: the single writer of the session.
//!
//! Key presses and ticks both arrive here, one at a time, in the order the
//! event loop receives them. After every transition the controller arms the
//! ticker while the session is active and disarms it once the session ends.

use crate::ticker::{Epoch, Ticker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_stars::{Event, Session, SessionError, Snapshot};
use tracing::{debug, info, instrument};

/// Builds the random source for target generation.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Owns the session, its random source and its tick schedule.
#[derive(Debug)]
pub struct Controller<R> {
    session: Session,
    rng: R,
    ticker: Ticker,
}

impl<R: Rng> Controller<R> {
    /// Starts a session and arms the ticker.
    #[instrument(skip_all)]
    pub fn new(mut rng: R, ticker: Ticker) -> Result<Self, SessionError> {
        let session = Session::new(&mut rng)?;
        let mut controller = Self {
            session,
            rng,
            ticker,
        };
        controller.sync_ticker(true);
        Ok(controller)
    }

    /// Applies a player event.
    ///
    /// On error the previous session is kept.
    #[instrument(skip(self), fields(status = %self.session.status()))]
    pub fn handle(&mut self, event: Event) -> Result<(), SessionError> {
        let next = self.session.clone().apply(event, &mut self.rng)?;
        let status = next.status();
        if status != self.session.status() {
            info!(%status, "Session status changed");
        }
        self.session = next;
        self.sync_ticker(event == Event::Restart);
        Ok(())
    }

    /// Applies a tick from the scheduler, dropping it if its epoch is stale.
    #[instrument(skip(self))]
    pub fn on_tick(&mut self, epoch: Epoch) -> Result<(), SessionError> {
        if !self.ticker.accepts(epoch) {
            debug!(%epoch, "Discarding stale tick");
            return Ok(());
        }
        self.handle(Event::Tick)
    }

    fn sync_ticker(&mut self, fresh_session: bool) {
        match (self.session.is_active(), self.ticker.is_armed()) {
            (true, false) => {
                self.ticker.arm();
            }
            (true, true) if fresh_session => {
                self.ticker.arm();
            }
            (false, true) => self.ticker.disarm(),
            _ => {}
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the renderer snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Returns true while the clock is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_stars::SessionStatus;
    use tokio::sync::mpsc;
    use tokio::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_tick_counts_down() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::new(Duration::from_secs(1), tx);
        let mut controller = Controller::new(seeded_rng(Some(1)), ticker).unwrap();
        assert!(controller.is_ticking());

        let epoch = rx.recv().await.unwrap();
        controller.on_tick(epoch).unwrap();
        assert_eq!(controller.session().remaining(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_discards_pending_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::new(Duration::from_secs(1), tx);
        let mut controller = Controller::new(seeded_rng(Some(2)), ticker).unwrap();

        let stale = rx.recv().await.unwrap();
        controller.handle(Event::Restart).unwrap();
        controller.on_tick(stale).unwrap();
        assert_eq!(controller.session().remaining(), 10);
        assert!(controller.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loss_stops_the_clock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::new(Duration::from_secs(1), tx);
        let mut controller = Controller::new(seeded_rng(Some(3)), ticker).unwrap();

        let mut last = None;
        while controller.session().is_active() {
            let epoch = rx.recv().await.unwrap();
            controller.on_tick(epoch).unwrap();
            last = Some(epoch);
        }
        assert_eq!(controller.session().status(), SessionStatus::Lost);
        assert!(!controller.is_ticking());

        controller.on_tick(last.unwrap()).unwrap();
        assert_eq!(controller.session().remaining(), 0);
        assert_eq!(controller.session().status(), SessionStatus::Lost);
    }
}
