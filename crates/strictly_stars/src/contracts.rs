//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} transition {Q}.

use crate::error::SessionError;
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::pool::Number;
use crate::typestate::ActiveSession;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Validates a session against every [`SessionInvariants`] member.
#[instrument(skip(session))]
pub fn validate(session: &ActiveSession) -> Result<(), SessionError> {
    SessionInvariants::check_all(session).map_err(|violations| {
        let message = describe(&violations);
        warn!(%message, "Session invariants violated");
        SessionError::InvariantViolation(message)
    })
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Postcondition: the available numbers only ever shrink.
pub struct PoolShrinks;

impl PoolShrinks {
    /// Checks that `after` holds no number that `before` had already retired.
    #[instrument(skip_all)]
    pub fn check(before: &ActiveSession, after: &ActiveSession) -> Result<(), SessionError> {
        if after
            .available()
            .iter()
            .all(|n| before.available().contains(n))
        {
            Ok(())
        } else {
            Err(SessionError::InvariantViolation(
                "A retired number came back into play".to_string(),
            ))
        }
    }
}

/// Contract for selecting a number.
///
/// Preconditions:
/// - The session satisfies its invariants
///
/// Postconditions:
/// - The session still satisfies its invariants
/// - No retired number came back
pub struct SelectContract;

impl Contract<ActiveSession, Number> for SelectContract {
    fn pre(session: &ActiveSession, _number: &Number) -> Result<(), SessionError> {
        validate(session)
    }

    fn post(before: &ActiveSession, after: &ActiveSession) -> Result<(), SessionError> {
        PoolShrinks::check(before, after)?;
        validate(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transition;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn test_precondition_holds_for_new_session() {
        let mut rng = StdRng::seed_from_u64(5);
        let session = ActiveSession::start(&mut rng).unwrap();
        assert!(SelectContract::pre(&session, &n(1)).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_selection() {
        let mut rng = StdRng::seed_from_u64(5);
        let session = ActiveSession::from_parts(5, crate::pool::pool(), vec![], 10).unwrap();
        match session.clone().select(n(2), &mut rng).unwrap() {
            Transition::Active(after) => assert!(SelectContract::post(&session, &after).is_ok()),
            Transition::Finished(_) => panic!("One selection cannot finish the session"),
        }
    }

    #[test]
    fn test_postcondition_detects_resurrected_number() {
        let before = ActiveSession::from_parts(4, vec![n(1), n(4)], vec![], 10).unwrap();
        let mut after = before.clone();
        after.available.push(n(9));
        assert!(matches!(
            SelectContract::post(&before, &after),
            Err(SessionError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = ActiveSession::from_parts(4, vec![n(1), n(4)], vec![], 10).unwrap();
        let mut after = before.clone();
        after.target = 2;
        let err = SelectContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().contains("reachable"));
    }
}
