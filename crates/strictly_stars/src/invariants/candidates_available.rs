//! Selection invariant: candidates are distinct numbers still in play.

use super::Invariant;
use crate::typestate::ActiveSession;
use std::collections::HashSet;

/// Invariant: every candidate is available and appears once.
pub struct CandidatesAvailableInvariant;

impl Invariant<ActiveSession> for CandidatesAvailableInvariant {
    fn holds(session: &ActiveSession) -> bool {
        let mut seen = HashSet::new();
        session
            .candidates()
            .iter()
            .all(|n| session.available().contains(n) && seen.insert(*n))
    }

    fn description() -> &'static str {
        "Candidates are distinct and still available"
    }
}
