//! Repeated oracle draws, reported as JSON.

use crate::controller::seeded_rng;
use derive_more::{Display, Error, From};
use derive_new::new;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use strictly_stars::oracle::{self, OracleError};
use tracing::{info, instrument, warn};

/// Most numbers a single run may enumerate subsets of.
pub const MAX_SAMPLE_NUMBERS: usize = 20;

/// Why a sampling run was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SampleError {
    /// Zero never belongs to a subset sum.
    #[display("Numbers must be positive, got {_0:?}")]
    #[from(ignore)]
    NonPositive(#[error(not(source))] Vec<u32>),
    /// Subset enumeration doubles with every number.
    #[display("At most {max} numbers can be sampled, got {count}")]
    #[from(ignore)]
    TooManyNumbers {
        /// Numbers requested.
        count: usize,
        /// The cap.
        max: usize,
    },
    /// The oracle had nothing to draw from.
    #[display("{_0}")]
    Oracle(OracleError),
}

/// A request to sample the oracle `draws` times.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SampleRequest {
    numbers: Vec<u32>,
    bound: u32,
    draws: usize,
    seed: Option<u64>,
}

/// Exact weights next to the observed histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    /// Numbers sampled over.
    pub numbers: Vec<u32>,
    /// Upper bound on a target.
    pub bound: u32,
    /// Subsets reaching each sum.
    pub weights: BTreeMap<u32, usize>,
    /// Number of draws taken.
    pub draws: usize,
    /// Times each sum was drawn.
    pub histogram: BTreeMap<u32, usize>,
}

impl SampleRequest {
    /// Draws from the oracle and tallies the results.
    #[instrument(skip(self), fields(numbers = ?self.numbers, bound = self.bound, draws = self.draws))]
    pub fn run(&self) -> Result<SampleReport, SampleError> {
        if self.numbers.contains(&0) {
            return Err(SampleError::NonPositive(self.numbers.clone()));
        }

        if self.numbers.len() > MAX_SAMPLE_NUMBERS {
            warn!(count = self.numbers.len(), "Too many numbers to sample");
            return Err(SampleError::TooManyNumbers {
                count: self.numbers.len(),
                max: MAX_SAMPLE_NUMBERS,
            });
        }

        // Enumerated once; every draw indexes into the same multiset.
        let sums = oracle::achievable_sums(&self.numbers, self.bound);
        if sums.is_empty() {
            return Err(OracleError::NoAchievableSum {
                numbers: self.numbers.clone(),
                bound: self.bound,
            }
            .into());
        }

        let mut weights = BTreeMap::new();
        for &sum in &sums {
            *weights.entry(sum).or_insert(0) += 1;
        }

        let mut rng = seeded_rng(self.seed);
        let mut histogram = BTreeMap::new();
        for _ in 0..self.draws {
            let sum = sums[rng.random_range(0..sums.len())];
            *histogram.entry(sum).or_insert(0) += 1;
        }

        info!(distinct = weights.len(), "Sampling complete");
        Ok(SampleReport {
            numbers: self.numbers.clone(),
            bound: self.bound,
            weights,
            draws: self.draws,
            histogram,
        })
    }
}
