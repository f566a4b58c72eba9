//! Phase-specific typestate structs for a puzzle session.
//!
//! Each phase is its own type. Only an [`ActiveSession`] accepts ticks and
//! selections, and a [`FinishedSession`] ALWAYS carries an [`Outcome`].

use crate::contracts::{self, Contract, SelectContract};
use crate::error::SessionError;
use crate::oracle;
use crate::phases::Outcome;
use crate::pool::{self, INITIAL_SECONDS, Number, TARGET_BOUND};
use crate::status::{self, NumberStatus};
use rand::Rng;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// Session in play: the clock runs and selections are accepted.
///
/// Invariants (see [`crate::invariants`]):
/// - the target is reachable from the available numbers
/// - candidates are distinct and available
/// - remaining time is positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub(crate) target: u32,
    pub(crate) available: Vec<Number>,
    pub(crate) candidates: Vec<Number>,
    pub(crate) remaining: u32,
}

impl ActiveSession {
    /// Starts a session: full pool, empty selection, full clock, fresh target.
    #[instrument(skip(rng))]
    pub fn start<R: Rng>(rng: &mut R) -> Result<Self, SessionError> {
        let available = pool::pool();
        let target =
            oracle::pick_random_achievable_sum(&pool::values(&available), TARGET_BOUND, rng)?;
        info!(target, "Session started");
        Ok(Self {
            target,
            available,
            candidates: Vec::new(),
            remaining: INITIAL_SECONDS,
        })
    }

    /// Builds a session from explicit parts.
    ///
    /// `available` is normalised to pool order without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvariantViolation`] if the parts break a
    /// session invariant (unreachable target, stray candidate, no time left).
    #[instrument]
    pub fn from_parts(
        target: u32,
        mut available: Vec<Number>,
        candidates: Vec<Number>,
        remaining: u32,
    ) -> Result<Self, SessionError> {
        available.sort();
        available.dedup();
        let session = Self {
            target,
            available,
            candidates,
            remaining,
        };
        contracts::validate(&session)?;
        Ok(session)
    }

    /// Advances the clock by one second, consuming the session.
    ///
    /// Running out of time finishes the session as [`Outcome::Lost`].
    #[instrument(skip(self), fields(remaining = self.remaining))]
    pub fn tick(self) -> Transition {
        let remaining = self.remaining.saturating_sub(1);
        if remaining == 0 {
            info!(left = self.available.len(), "Time is up");
            return Transition::Finished(FinishedSession {
                target: self.target,
                available: self.available,
                candidates: self.candidates,
                remaining,
                outcome: Outcome::Lost,
            });
        }
        debug!(remaining, "Tick");
        Transition::Active(Self { remaining, ..self })
    }

    /// Toggles `number` in the selection, consuming the session.
    ///
    /// A used number leaves the session untouched. When the selection sums
    /// exactly to the target, the selected numbers are retired and either a
    /// new target is drawn from what remains or, if nothing remains, the
    /// session finishes as [`Outcome::Won`]. An overshooting selection stays
    /// in place until the player deselects.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, rng), fields(target = self.target))]
    pub fn select<R: Rng>(self, number: Number, rng: &mut R) -> Result<Transition, SessionError> {
        if self.status_of(number) == NumberStatus::Used {
            debug!(%number, "Ignoring used number");
            return Ok(Transition::Active(self));
        }

        SelectContract::pre(&self, &number)?;
        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        match game.candidates.iter().position(|&c| c == number) {
            Some(index) => {
                game.candidates.remove(index);
            }
            None => game.candidates.push(number),
        }

        let sum = pool::sum(&game.candidates);
        if sum != game.target {
            debug!(%number, sum, "Round still open");
            #[cfg(debug_assertions)]
            SelectContract::post(&before, &game)?;
            return Ok(Transition::Active(game));
        }

        let matched = std::mem::take(&mut game.candidates);
        game.available.retain(|n| !matched.contains(n));
        info!(?matched, left = game.available.len(), "Round cleared");

        if game.available.is_empty() {
            info!("Every number matched");
            return Ok(Transition::Finished(FinishedSession {
                target: game.target,
                available: game.available,
                candidates: game.candidates,
                remaining: game.remaining,
                outcome: Outcome::Won,
            }));
        }

        game.target =
            oracle::pick_random_achievable_sum(&pool::values(&game.available), TARGET_BOUND, rng)?;
        debug!(target = game.target, "New target");

        #[cfg(debug_assertions)]
        SelectContract::post(&before, &game)?;

        Ok(Transition::Active(game))
    }

    /// Returns the number of stars to match.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns the numbers still in play, in pool order.
    pub fn available(&self) -> &[Number] {
        &self.available
    }

    /// Returns the current selection, in click order.
    pub fn candidates(&self) -> &[Number] {
        &self.candidates
    }

    /// Returns the seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the sum of the current selection.
    pub fn candidate_sum(&self) -> u32 {
        pool::sum(&self.candidates)
    }

    /// Derives the status of one number.
    pub fn status_of(&self, number: Number) -> NumberStatus {
        status::status_of(number, &self.available, &self.candidates, self.target)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Session over: won or lost, frozen until restarted.
///
/// The outcome is ALWAYS present. The target is the last one posed and no
/// longer means anything for play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedSession {
    target: u32,
    available: Vec<Number>,
    candidates: Vec<Number>,
    remaining: u32,
    outcome: Outcome,
}

impl FinishedSession {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the last target posed.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns the numbers left unmatched (empty after a win).
    pub fn available(&self) -> &[Number] {
        &self.available
    }

    /// Returns the selection at the moment the session ended.
    pub fn candidates(&self) -> &[Number] {
        &self.candidates
    }

    /// Returns the seconds that were left (zero after a loss).
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Derives the status of one number.
    pub fn status_of(&self, number: Number) -> NumberStatus {
        status::status_of(number, &self.available, &self.candidates, self.target)
    }

    /// Starts a fresh, independent session (consumes the finished one).
    #[instrument(skip(self, rng), fields(outcome = %self.outcome))]
    pub fn restart<R: Rng>(self, rng: &mut R) -> Result<ActiveSession, SessionError> {
        ActiveSession::start(rng)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of a transition on an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The session continues.
    Active(ActiveSession),
    /// The session finished.
    Finished(FinishedSession),
}
