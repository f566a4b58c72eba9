//! Property-based tests for the session state machine.
//!
//! Random event streams are folded into a session; after every event:
//!
//! 1. An active session satisfies every session invariant.
//! 2. The available numbers never grow (except through restart).
//! 3. Finished sessions do not change without a restart.
//! 4. Remaining time never exceeds the starting clock.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_stars::invariants::{InvariantSet, SessionInvariants};
use strictly_stars::{Event, INITIAL_SECONDS, Number, Session, SessionStatus};

// ── Helpers ─────────────────────────────────────────────────────────────

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        3 => Just(Event::Tick),
        12 => (1u8..=9).prop_map(|v| Event::Select(Number::new(v).unwrap())),
        1 => Just(Event::Restart),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_under_any_event_stream(
        seed in any::<u64>(),
        events in proptest::collection::vec(event_strategy(), 0..80),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new(&mut rng).unwrap();

        for event in events {
            let before = session.clone();
            session = session.apply(event, &mut rng).unwrap();

            if let Session::Active(active) = &session {
                prop_assert!(SessionInvariants::check_all(active).is_ok());
            }
            prop_assert!(session.remaining() <= INITIAL_SECONDS);

            if event != Event::Restart {
                prop_assert!(session.available().iter().all(|n| before.available().contains(n)));
                if before.status().is_terminal() {
                    prop_assert_eq!(&session, &before);
                }
            }
        }
    }

    #[test]
    fn toggling_twice_is_identity(seed in any::<u64>(), value in 1u8..=9) {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Session::new(&mut rng).unwrap();
        let number = Number::new(value).unwrap();

        let once = session.clone().apply(Event::Select(number), &mut rng).unwrap();
        // A single number equal to the target resolves the round; nothing to undo then.
        prop_assume!(once.available().len() == session.available().len());
        let twice = once.apply(Event::Select(number), &mut rng).unwrap();
        prop_assert_eq!(twice.candidates(), session.candidates());
        prop_assert_eq!(twice.status(), SessionStatus::Active);
    }
}
