//! Session error types.

use crate::oracle::OracleError;
use derive_more::{Display, Error, From};

/// Error raised by a session transition.
///
/// Neither variant can occur while the session invariants hold; both signal
/// a programming error rather than bad player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The oracle could not produce a target.
    #[display("Target generation failed: {_0}")]
    #[from]
    Oracle(OracleError),

    /// A session invariant does not hold.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
