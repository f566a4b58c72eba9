//! Clock invariant: an active session always has time left.

use super::Invariant;
use crate::pool::INITIAL_SECONDS;
use crate::typestate::ActiveSession;

/// Invariant: remaining time is within `1..=INITIAL_SECONDS`.
///
/// Reaching zero finishes the session, so an active one never shows it.
pub struct ClockRunningInvariant;

impl Invariant<ActiveSession> for ClockRunningInvariant {
    fn holds(session: &ActiveSession) -> bool {
        (1..=INITIAL_SECONDS).contains(&session.remaining())
    }

    fn description() -> &'static str {
        "Remaining time is positive and never above the starting clock"
    }
}
