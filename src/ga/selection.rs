//! Parent selection strategies.
//!
//! Selection determines which members of the ranked population are drawn
//! as crossover parents. Every strategy works on a slice of costs (lower is
//! better) and returns an index into it.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (lower cost = better).
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Plain uniform sampling; elitism supplies the selection pressure.
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Uniform);
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Every individual is equally likely, regardless of cost.
    ///
    /// # Complexity
    /// O(1) per selection
    #[default]
    Uniform,

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure. `k = 1` degenerates to
    /// [`Selection::Uniform`].
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Since costs are minimized, weights are `max_cost - cost + epsilon`.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,

    /// Linear rank-based selection: the best of `n` individuals gets weight
    /// `n`, the worst gets weight 1.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Selection {
    /// Select a parent index from a slice of costs.
    ///
    /// # Panics
    /// Panics if `costs` is empty.
    pub fn select<R: Rng>(&self, costs: &[f64], rng: &mut R) -> usize {
        assert!(!costs.is_empty(), "cannot select from empty population");

        match self {
            Selection::Uniform => rng.random_range(0..costs.len()),
            Selection::Tournament(k) => tournament(costs, *k, rng),
            Selection::Roulette => roulette(costs, rng),
            Selection::Rank => rank(costs, rng),
        }
    }
}

fn tournament<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> usize {
    let n = costs.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if costs[idx] < costs[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

fn roulette<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    let n = costs.len();
    if n == 1 {
        return 0;
    }

    let max_cost = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;

    let weights: Vec<f64> = costs
        .iter()
        .map(|&c| (max_cost - c + epsilon).max(epsilon))
        .collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

fn rank<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    let n = costs.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        costs[a]
            .partial_cmp(&costs[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (position, &original_idx) in order.iter().enumerate() {
        cumulative += (n - position) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    order[n - 1]
}
