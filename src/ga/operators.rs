//! Permutation-based genetic operators.
//!
//! Crossover and mutation operators for permutation-encoded chromosomes.
//! They operate on `&[usize]` index vectors where every value in `0..n`
//! appears exactly once, and they always return valid permutations.
//!
//! # Operators
//!
//! - [`order_crossover`] (OX): contiguous slice from parent1, ordered fill from parent2
//! - [`swap_mutation`]: probabilistic exchange of two distinct positions
//! - [`shuffled_permutation`]: uniform random permutation for initialization
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// Draws `start` uniformly in `[0, n-1]` and `end` uniformly in
/// `[start+1, n]`, then builds the child with [`order_crossover_with_cut`].
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or have fewer than two cities.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 cities, got {n}");

    let start = rng.random_range(0..n);
    let end = rng.random_range(start + 1..=n);
    order_crossover_with_cut(parent1, parent2, start, end)
}

/// Builds an OX child for a fixed cut `[start, end)`.
///
/// 1. Copy `parent1[start..end]` into the child at the same positions
/// 2. Fill the remaining positions left to right, starting at index 0,
///    with the cities of `parent2` in `parent2`'s order, skipping any city
///    already taken from the slice
///
/// `start == 0` or `end == n` simply copy a prefix or suffix of parent1.
///
/// # Panics
/// Panics if the parents differ in length, `n < 2`, or the cut does not
/// satisfy `start < end <= n`.
pub fn order_crossover_with_cut(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 cities, got {n}");
    assert!(
        start < end && end <= n,
        "invalid cut [{start}, {end}) for {n} cities"
    );

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut remaining = parent2.iter().copied().filter(|&city| !placed[city]);
    for slot in child.iter_mut().filter(|slot| **slot == usize::MAX) {
        *slot = remaining
            .next()
            .expect("parents are permutations of the same city set");
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `probability`, exchange two distinct
/// positions chosen uniformly without replacement.
///
/// Draws one uniform value in `[0, 1)` per call; at most one swap happens.
/// Returns `true` if a swap was made.
///
/// # Complexity
/// O(1)
///
/// # Panics
/// Panics if the permutation has fewer than two elements.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], probability: f64, rng: &mut R) -> bool {
    let n = perm.len();
    assert!(n >= 2, "swap mutation needs at least 2 positions, got {n}");

    if rng.random::<f64>() >= probability {
        return false;
    }

    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    perm.swap(i, j);
    true
}

// ============================================================================
// Helpers
// ============================================================================

/// Returns a uniformly random permutation of `0..n` (Fisher-Yates).
pub fn shuffled_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Returns `true` if `perm` contains every value in `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;
    use proptest::prelude::*;

    // ---- OX Crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];

        for _ in 0..100 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 8), "OX child not valid: {child:?}");
        }
    }

    #[test]
    fn test_ox_fixed_cut() {
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 3, 1, 0, 4, 2];
        // Slice [2, 4) keeps 2 and 3; the rest come from p2 in order: 5, 1, 0, 4.
        let child = order_crossover_with_cut(&p1, &p2, 2, 4);
        assert_eq!(child, vec![5, 1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_ox_prefix_and_suffix_cuts() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![3, 2, 1, 0];
        assert_eq!(order_crossover_with_cut(&p1, &p2, 0, 2), vec![0, 1, 3, 2]);
        assert_eq!(order_crossover_with_cut(&p1, &p2, 2, 4), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_ox_full_cut_copies_parent1() {
        let p1 = vec![2, 0, 3, 1];
        let p2 = vec![0, 1, 2, 3];
        assert_eq!(order_crossover_with_cut(&p1, &p2, 0, 4), p1);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(5);
        let p = vec![3, 1, 4, 0, 2];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_two_elements() {
        let mut rng = create_rng(42);
        let p1 = vec![0, 1];
        let p2 = vec![1, 0];
        for _ in 0..20 {
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(is_permutation(&child, 2));
        }
    }

    #[test]
    #[should_panic(expected = "crossover needs at least 2 cities")]
    fn test_ox_single_city_panics() {
        let mut rng = create_rng(42);
        order_crossover(&[0], &[0], &mut rng);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        let mut rng = create_rng(42);
        order_crossover(&[0, 1, 2], &[0, 1], &mut rng);
    }

    #[test]
    #[should_panic(expected = "invalid cut")]
    fn test_ox_empty_cut_panics() {
        order_crossover_with_cut(&[0, 1, 2], &[2, 1, 0], 1, 1);
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_probability_zero_is_identity() {
        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let mut perm: Vec<usize> = (0..10).collect();
            assert!(!swap_mutation(&mut perm, 0.0, &mut rng));
            assert_eq!(perm, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_swap_probability_one_changes_exactly_two_positions() {
        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let original: Vec<usize> = (0..10).collect();
            let mut perm = original.clone();
            assert!(swap_mutation(&mut perm, 1.0, &mut rng));

            let diff: Vec<usize> = (0..10).filter(|&i| perm[i] != original[i]).collect();
            assert_eq!(diff.len(), 2, "seed {seed}: {perm:?}");
            assert_eq!(perm[diff[0]], original[diff[1]]);
            assert_eq!(perm[diff[1]], original[diff[0]]);
        }
    }

    #[test]
    fn test_swap_two_elements_always_swaps() {
        let mut rng = create_rng(3);
        let mut perm = vec![0, 1];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_eq!(perm, vec![1, 0]);
    }

    #[test]
    fn test_swap_rate_is_roughly_respected() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = (0..10).collect();
        let swaps = (0..10_000)
            .filter(|_| swap_mutation(&mut perm, 0.2, &mut rng))
            .count();
        assert!((1_700..2_300).contains(&swaps), "got {swaps} swaps");
        assert!(is_permutation(&perm, 10));
    }

    #[test]
    #[should_panic(expected = "swap mutation needs at least 2 positions")]
    fn test_swap_single_element_panics() {
        let mut rng = create_rng(42);
        swap_mutation(&mut [0], 1.0, &mut rng);
    }

    // ---- Helpers ----

    #[test]
    fn test_shuffled_permutation_is_valid() {
        let mut rng = create_rng(42);
        for n in 0..20 {
            assert!(is_permutation(&shuffled_permutation(n, &mut rng), n));
        }
    }

    #[test]
    fn test_is_permutation_rejects_invalid() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    // ---- Properties ----

    fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
        Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
    }

    fn parents_and_cut() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, usize, usize)> {
        (2usize..40).prop_flat_map(|n| {
            (permutation(n), permutation(n), 0..n).prop_flat_map(move |(p1, p2, start)| {
                (Just(p1), Just(p2), Just(start), start + 1..=n)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_ox_child_is_permutation((p1, p2, start, end) in parents_and_cut()) {
            let child = order_crossover_with_cut(&p1, &p2, start, end);
            prop_assert!(is_permutation(&child, p1.len()));
            prop_assert_eq!(&child[start..end], &p1[start..end]);
        }

        #[test]
        fn prop_ox_fill_follows_parent2_order((p1, p2, start, end) in parents_and_cut()) {
            let child = order_crossover_with_cut(&p1, &p2, start, end);
            let filled: Vec<usize> = child
                .iter()
                .enumerate()
                .filter(|(i, _)| *i < start || *i >= end)
                .map(|(_, &c)| c)
                .collect();
            let expected: Vec<usize> = p2
                .iter()
                .copied()
                .filter(|c| !p1[start..end].contains(c))
                .collect();
            prop_assert_eq!(filled, expected);
        }

        #[test]
        fn prop_swap_keeps_permutation(perm in (2usize..40).prop_flat_map(permutation), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let mut mutated = perm.clone();
            swap_mutation(&mut mutated, 1.0, &mut rng);
            prop_assert!(is_permutation(&mutated, perm.len()));
        }
    }
}
