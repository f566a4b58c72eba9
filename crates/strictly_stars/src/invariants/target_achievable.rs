//! Target invariant: some subset of the remaining numbers reaches the target.

use super::Invariant;
use crate::oracle;
use crate::pool::{self, TARGET_BOUND};
use crate::typestate::ActiveSession;

/// Invariant: the target is the sum of a non-empty subset of the available numbers.
///
/// Holds by induction: every target comes from the oracle over the numbers
/// that were available at the time, and only a completed match removes numbers.
pub struct TargetAchievableInvariant;

impl Invariant<ActiveSession> for TargetAchievableInvariant {
    fn holds(session: &ActiveSession) -> bool {
        session.target() <= TARGET_BOUND
            && oracle::is_achievable(&pool::values(session.available()), session.target())
    }

    fn description() -> &'static str {
        "Target is reachable from the available numbers"
    }
}
