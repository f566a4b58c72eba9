//! The fixed number pool and the numeric helpers shared by the oracle and the session.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest number in the pool.
pub const POOL_MIN: u8 = 1;

/// Largest number in the pool.
pub const POOL_MAX: u8 = 9;

/// Upper bound for every generated target.
pub const TARGET_BOUND: u32 = 9;

/// Seconds on the clock when a session starts.
pub const INITIAL_SECONDS: u32 = 10;

/// A number from the pool (1-9).
///
/// The only way to obtain one is through [`Number::new`] or [`Number::all`],
/// so anything holding a `Number` can index the pool without further checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{_0}")]
pub struct Number(u8);

impl Number {
    /// The smallest number in the pool.
    pub const MIN: Number = Number(POOL_MIN);

    /// The largest number in the pool.
    pub const MAX: Number = Number(POOL_MAX);

    /// Creates a number, rejecting values outside the pool.
    #[instrument]
    pub fn new(value: u8) -> Result<Self, NumberError> {
        if (POOL_MIN..=POOL_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(NumberError { value })
        }
    }

    /// Returns the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the value widened for arithmetic.
    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    /// Iterates the whole pool in ascending order.
    pub fn all() -> impl Iterator<Item = Number> {
        (POOL_MIN..=POOL_MAX).map(Number)
    }
}

impl TryFrom<u8> for Number {
    type Error = NumberError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> Self {
        number.0
    }
}

/// A value that is not part of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{} is outside the pool ({}-{})", value, POOL_MIN, POOL_MAX)]
pub struct NumberError {
    /// The rejected value.
    pub value: u8,
}

/// Returns the full pool in ascending order.
pub fn pool() -> Vec<Number> {
    Number::all().collect()
}

/// Sums a selection of numbers.
pub fn sum(numbers: &[Number]) -> u32 {
    numbers.iter().map(|n| n.value()).sum()
}

/// Widens numbers for the oracle.
pub fn values(numbers: &[Number]) -> Vec<u32> {
    numbers.iter().map(|n| n.value()).collect()
}
