//! Property-based tests for the subset-sum oracle.
//!
//! 1. Every pick is the sum of some real subset and within the bound.
//! 2. The multiset holds exactly one entry per qualifying subset.
//! 3. Weights agree with the multiset.
//! 4. The oracle errors exactly when nothing fits.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_stars::oracle::{achievable_sums, is_achievable, sum_weights};
use strictly_stars::pick_random_achievable_sum;

// ── Helpers ─────────────────────────────────────────────────────────────

fn numbers_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::sample::subsequence((1u32..=9).collect::<Vec<_>>(), 0..=9)
}

fn brute_force_sums(numbers: &[u32], bound: u32) -> Vec<u32> {
    let mut sums: Vec<u32> = (1u32..(1 << numbers.len()))
        .map(|mask| {
            (0..numbers.len())
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| numbers[i])
                .sum()
        })
        .filter(|&sum| sum <= bound)
        .collect();
    sums.sort_unstable();
    sums
}

proptest! {
    #[test]
    fn pick_is_a_real_subset_sum(numbers in numbers_strategy(), bound in 1u32..=20, seed in any::<u64>()) {
        prop_assume!(numbers.iter().any(|&n| n <= bound));
        let mut rng = StdRng::seed_from_u64(seed);
        let target = pick_random_achievable_sum(&numbers, bound, &mut rng).unwrap();
        prop_assert!(target <= bound);
        prop_assert!(is_achievable(&numbers, target), "{} not reachable from {:?}", target, numbers);
    }

    #[test]
    fn multiset_matches_brute_force(numbers in numbers_strategy(), bound in 0u32..=45) {
        let mut sums = achievable_sums(&numbers, bound);
        sums.sort_unstable();
        prop_assert_eq!(sums, brute_force_sums(&numbers, bound));
    }

    #[test]
    fn weights_count_the_multiset(numbers in numbers_strategy(), bound in 0u32..=45) {
        let weights = sum_weights(&numbers, bound);
        let total: usize = weights.values().sum();
        prop_assert_eq!(total, achievable_sums(&numbers, bound).len());
        prop_assert!(weights.keys().all(|&sum| sum >= 1 && sum <= bound));
    }

    #[test]
    fn errors_only_when_nothing_fits(numbers in numbers_strategy(), bound in 0u32..=9, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let fits = numbers.iter().any(|&n| n <= bound);
        prop_assert_eq!(pick_random_achievable_sum(&numbers, bound, &mut rng).is_ok(), fits);
    }
}
