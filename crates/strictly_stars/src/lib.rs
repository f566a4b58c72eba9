//! Strictly Stars - pure logic for the star-matching number puzzle.
//!
//! A target number of stars is shown; the player picks numbers from the pool
//! 1-9 whose sum equals it. Matched numbers are retired and a new target is
//! drawn from what remains, until every number is used (win) or the clock
//! runs out (loss).
//!
//! # Architecture
//!
//! - **Oracle**: samples a target that some subset of the remaining numbers reaches
//! - **Typestate**: [`ActiveSession`] and [`FinishedSession`] phases
//! - **Session**: [`Session`] wrapper that folds [`Event`]s into the state
//! - **Status**: per-number status derived on demand, never stored
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use strictly_stars::{Event, Number, Session, SessionStatus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let session = Session::new(&mut rng)?;
//! let session = session.apply(Event::Select(Number::new(1)?), &mut rng)?;
//! let session = session.apply(Event::Tick, &mut rng)?;
//! assert_eq!(session.status(), SessionStatus::Active);
//! assert_eq!(session.remaining(), 9);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
pub mod invariants;
pub mod oracle;
mod phases;
pub mod pool;
mod session;
mod snapshot;
mod status;
mod typestate;

pub use action::Event;
pub use contracts::{Contract, PoolShrinks, SelectContract, validate};
pub use error::SessionError;
pub use oracle::{OracleError, pick_random_achievable_sum};
pub use phases::{Outcome, SessionStatus};
pub use pool::{INITIAL_SECONDS, Number, NumberError, TARGET_BOUND};
pub use session::Session;
pub use snapshot::Snapshot;
pub use status::{NumberStatus, project, status_of};
pub use typestate::{ActiveSession, FinishedSession, Transition};
