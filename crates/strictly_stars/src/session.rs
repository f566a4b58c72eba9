//! Phase-agnostic session wrapper.
//!
//! Typestate phases are distinct types, so code that holds "the current
//! session" across events (the controller, tests) stores a [`Session`] and
//! folds events into it with [`Session::apply`].

use crate::action::Event;
use crate::error::SessionError;
use crate::phases::SessionStatus;
use crate::pool::Number;
use crate::snapshot::Snapshot;
use crate::status;
use crate::typestate::{ActiveSession, FinishedSession, Transition};
use rand::Rng;
use tracing::{debug, info, instrument};

/// A session in any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Rounds are still being played.
    Active(ActiveSession),
    /// Won or lost; only a restart changes it.
    Finished(FinishedSession),
}

impl From<ActiveSession> for Session {
    fn from(session: ActiveSession) -> Self {
        Session::Active(session)
    }
}

impl From<FinishedSession> for Session {
    fn from(session: FinishedSession) -> Self {
        Session::Finished(session)
    }
}

impl From<Transition> for Session {
    fn from(transition: Transition) -> Self {
        match transition {
            Transition::Active(s) => s.into(),
            Transition::Finished(s) => s.into(),
        }
    }
}

impl Session {
    /// Starts a fresh session.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, SessionError> {
        Ok(ActiveSession::start(rng)?.into())
    }

    /// Folds one event into the session and returns the next state.
    ///
    /// Ticks and selections on a finished session are no-ops. Restart always
    /// yields a brand-new session, whatever the current phase.
    #[instrument(skip(self, rng), fields(status = %self.status()))]
    pub fn apply<R: Rng>(self, event: Event, rng: &mut R) -> Result<Self, SessionError> {
        match (self, event) {
            (_, Event::Restart) => {
                info!("Restarting session");
                Session::new(rng)
            }
            (Session::Active(s), Event::Tick) => Ok(s.tick().into()),
            (Session::Active(s), Event::Select(number)) => Ok(s.select(number, rng)?.into()),
            (finished @ Session::Finished(_), event) => {
                debug!(%event, "Ignoring event on finished session");
                Ok(finished)
            }
        }
    }

    /// Returns where the session stands.
    pub fn status(&self) -> SessionStatus {
        match self {
            Session::Active(_) => SessionStatus::Active,
            Session::Finished(f) => f.outcome().into(),
        }
    }

    /// Returns true while rounds are being played.
    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active(_))
    }

    /// Returns the current (or last) target.
    pub fn target(&self) -> u32 {
        match self {
            Session::Active(s) => s.target(),
            Session::Finished(f) => f.target(),
        }
    }

    /// Returns the numbers still in play.
    pub fn available(&self) -> &[Number] {
        match self {
            Session::Active(s) => s.available(),
            Session::Finished(f) => f.available(),
        }
    }

    /// Returns the current selection.
    pub fn candidates(&self) -> &[Number] {
        match self {
            Session::Active(s) => s.candidates(),
            Session::Finished(f) => f.candidates(),
        }
    }

    /// Returns the seconds left.
    pub fn remaining(&self) -> u32 {
        match self {
            Session::Active(s) => s.remaining(),
            Session::Finished(f) => f.remaining(),
        }
    }

    /// Projects the session into a renderer snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.target(),
            status::project(self.available(), self.candidates(), self.target()),
            self.remaining(),
            self.status(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::Outcome;
    use crate::status::NumberStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn test_snapshot_of_new_session() {
        let mut rng = StdRng::seed_from_u64(3);
        let snapshot = Session::new(&mut rng).unwrap().snapshot();
        assert_eq!(*snapshot.remaining_time(), 10);
        assert_eq!(*snapshot.outcome(), SessionStatus::Active);
        assert_eq!(snapshot.number_statuses().len(), 9);
        assert!(
            snapshot
                .number_statuses()
                .values()
                .all(|s| *s == NumberStatus::Available)
        );
    }

    #[test]
    fn test_finished_session_ignores_events() {
        let mut rng = StdRng::seed_from_u64(3);
        let session: Session = ActiveSession::from_parts(1, vec![n(1)], vec![], 1)
            .unwrap()
            .tick()
            .into();
        assert_eq!(session.status(), SessionStatus::Lost);

        let after = session
            .clone()
            .apply(Event::Tick, &mut rng)
            .and_then(|s| s.apply(Event::Select(n(1)), &mut rng))
            .unwrap();
        assert_eq!(after, session);
    }

    #[test]
    fn test_restart_works_from_any_phase() {
        let mut rng = StdRng::seed_from_u64(3);
        let session: Session = ActiveSession::from_parts(1, vec![n(1)], vec![], 4)
            .unwrap()
            .into();
        let restarted = session.apply(Event::Restart, &mut rng).unwrap();
        assert_eq!(restarted.available().len(), 9);
        assert_eq!(restarted.remaining(), 10);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session: Session = ActiveSession::from_parts(5, vec![n(2), n(3)], vec![n(2)], 7)
            .unwrap()
            .into();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["target"], 5);
        assert_eq!(json["remaining_time"], 7);
        assert_eq!(json["outcome"], "active");
        assert_eq!(json["number_statuses"]["2"], "candidate");
        assert_eq!(json["number_statuses"]["3"], "available");
        assert_eq!(json["number_statuses"]["9"], "used");
    }

    #[test]
    fn test_won_status_from_outcome() {
        assert_eq!(SessionStatus::from(Outcome::Won), SessionStatus::Won);
        assert!(SessionStatus::Won.is_terminal());
    }
}
