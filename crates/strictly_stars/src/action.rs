//! Events that drive a session.
//!
//! Events are plain values: the presentation layer builds them from key
//! presses and timer ticks, and [`Session::apply`](crate::Session::apply)
//! folds them into the state one at a time.

use crate::pool::Number;
use serde::{Deserialize, Serialize};

/// Something that happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Event {
    /// One second elapsed.
    #[display("tick")]
    Tick,
    /// The player clicked a number.
    #[display("select {_0}")]
    Select(Number),
    /// The player asked for a fresh session.
    #[display("restart")]
    Restart,
}
