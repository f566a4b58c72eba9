//! Per-number status, projected from the session state on demand.

use crate::pool::{self, Number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a number in the pool should be shown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NumberStatus {
    /// Still in play and not selected.
    Available,
    /// Already matched in an earlier round.
    Used,
    /// Selected, and the selection does not overshoot the target.
    Candidate,
    /// Selected, and the selection sums past the target.
    Wrong,
}

/// Derives the status of one number.
pub fn status_of(
    number: Number,
    available: &[Number],
    candidates: &[Number],
    target: u32,
) -> NumberStatus {
    if !available.contains(&number) {
        return NumberStatus::Used;
    }
    if candidates.contains(&number) {
        return if pool::sum(candidates) > target {
            NumberStatus::Wrong
        } else {
            NumberStatus::Candidate
        };
    }
    NumberStatus::Available
}

/// Derives the status of every number in the pool, keyed by value.
pub fn project(
    available: &[Number],
    candidates: &[Number],
    target: u32,
) -> BTreeMap<u8, NumberStatus> {
    Number::all()
        .map(|n| (n.get(), status_of(n, available, candidates, target)))
        .collect()
}
