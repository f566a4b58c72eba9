//! Session status and the outcome of a finished session.

use serde::{Deserialize, Serialize};

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// Every number was matched.
    Won,
    /// The clock ran out with numbers left.
    Lost,
}

/// Where a session stands, as reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    /// Rounds are still being played.
    Active,
    /// Every number was matched.
    Won,
    /// The clock ran out.
    Lost,
}

impl SessionStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Active)
    }
}

impl From<Outcome> for SessionStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => SessionStatus::Won,
            Outcome::Lost => SessionStatus::Lost,
        }
    }
}
