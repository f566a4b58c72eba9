//! Read-only view of a session for renderers.

use crate::phases::SessionStatus;
use crate::pool::Number;
use crate::status::NumberStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a renderer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Number of stars to match (the last one posed once the session ended).
    target: u32,
    /// Status of every pool number, keyed by value.
    number_statuses: BTreeMap<u8, NumberStatus>,
    /// Seconds left on the clock.
    remaining_time: u32,
    /// Whether the session is still being played.
    outcome: SessionStatus,
}

impl Snapshot {
    pub(crate) fn new(
        target: u32,
        number_statuses: BTreeMap<u8, NumberStatus>,
        remaining_time: u32,
        outcome: SessionStatus,
    ) -> Self {
        Self {
            target,
            number_statuses,
            remaining_time,
            outcome,
        }
    }

    /// Returns the status of one number.
    pub fn status(&self, number: Number) -> NumberStatus {
        self.number_statuses
            .get(&number.get())
            .copied()
            .unwrap_or(NumberStatus::Used)
    }
}
