//! Subset-sum oracle.
//!
//! Targets are drawn from the sums of every subset of the remaining numbers
//! that stays within a bound. Sums reached by several subsets appear several
//! times in the sampling pool, so they are proportionally more likely to be
//! picked. Sampling never deduplicates.

use derive_more::{Display, Error};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Error raised when no subset fits under the bound.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum OracleError {
    /// Every non-empty subset exceeds the bound (or there are no numbers).
    #[display("No subset of {numbers:?} sums to at most {bound}")]
    NoAchievableSum {
        /// Numbers the oracle was asked about.
        numbers: Vec<u32>,
        /// The bound that nothing fit under.
        bound: u32,
    },
}

/// Enumerates the sum of every non-empty subset of `numbers` that does not exceed `bound`.
///
/// Duplicates are kept: the result holds one entry per subset, in the order
/// the subsets are discovered (numbers processed left to right, each one
/// extending every subset recorded so far).
#[instrument]
pub fn achievable_sums(numbers: &[u32], bound: u32) -> Vec<u32> {
    debug_assert!(numbers.iter().all(|&n| n > 0), "oracle numbers must be positive");

    // Sums of the recorded subsets, seeded with the empty subset.
    let mut subsets = vec![0u32];
    let mut sums = Vec::new();

    for &number in numbers {
        for j in 0..subsets.len() {
            let candidate = subsets[j].saturating_add(number);
            if candidate <= bound {
                subsets.push(candidate);
                sums.push(candidate);
            }
        }
    }

    sums
}

/// Picks one entry of [`achievable_sums`] uniformly at random.
///
/// # Errors
///
/// Returns [`OracleError::NoAchievableSum`] when no subset fits under `bound`,
/// which includes an empty `numbers`.
#[instrument(skip(rng))]
pub fn pick_random_achievable_sum<R: Rng>(
    numbers: &[u32],
    bound: u32,
    rng: &mut R,
) -> Result<u32, OracleError> {
    let sums = achievable_sums(numbers, bound);
    if sums.is_empty() {
        warn!(?numbers, bound, "No achievable sum");
        return Err(OracleError::NoAchievableSum {
            numbers: numbers.to_vec(),
            bound,
        });
    }

    let target = sums[rng.random_range(0..sums.len())];
    debug!(target, pool_size = sums.len(), "Picked achievable sum");
    Ok(target)
}

/// Counts how many subsets reach each achievable sum.
///
/// This is the exact, unnormalised distribution that
/// [`pick_random_achievable_sum`] samples from.
#[instrument]
pub fn sum_weights(numbers: &[u32], bound: u32) -> BTreeMap<u32, usize> {
    let mut weights = BTreeMap::new();
    for sum in achievable_sums(numbers, bound) {
        *weights.entry(sum).or_insert(0) += 1;
    }
    weights
}

/// Returns true if some non-empty subset of `numbers` sums exactly to `target`.
#[instrument]
pub fn is_achievable(numbers: &[u32], target: u32) -> bool {
    target > 0 && achievable_sums(numbers, target).contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sums_keep_duplicates_in_discovery_order() {
        assert_eq!(achievable_sums(&[1, 2, 3], 9), vec![1, 2, 3, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sums_respect_bound() {
        assert_eq!(achievable_sums(&[4, 5, 6], 5), vec![4, 5]);
        assert!(achievable_sums(&[7, 8], 6).is_empty());
    }

    #[test]
    fn test_full_pool_sums_cover_one_through_nine() {
        let weights = sum_weights(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 9);
        let keys: Vec<u32> = weights.keys().copied().collect();
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
        // 9 = {9}, {1,8}, {2,7}, {3,6}, {4,5}, {1,2,6}, {1,3,5}, {2,3,4}
        assert_eq!(weights[&9], 8);
        assert_eq!(weights[&1], 1);
    }

    #[test]
    fn test_weights_expose_bias() {
        let weights = sum_weights(&[1, 2, 3], 9);
        assert_eq!(weights[&3], 2);
        assert_eq!(weights[&6], 1);
    }

    #[test]
    fn test_pick_fails_on_empty_numbers() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = pick_random_achievable_sum(&[], 9, &mut rng).unwrap_err();
        assert_eq!(
            err,
            OracleError::NoAchievableSum {
                numbers: vec![],
                bound: 9
            }
        );
    }

    #[test]
    fn test_pick_fails_when_nothing_fits() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_random_achievable_sum(&[10, 12], 9, &mut rng).is_err());
    }

    #[test]
    fn test_pick_single_number() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random_achievable_sum(&[6], 9, &mut rng), Ok(6));
    }

    #[test]
    fn test_is_achievable() {
        assert!(is_achievable(&[1, 4, 5], 9));
        assert!(is_achievable(&[1, 4, 5], 10));
        assert!(!is_achievable(&[1, 4, 5], 2));
        assert!(!is_achievable(&[1, 4, 5], 0));
        assert!(!is_achievable(&[], 3));
    }
}
