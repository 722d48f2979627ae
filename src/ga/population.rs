//! Bounded, ordered population storage.

use super::types::GaProblem;
use rand::Rng;

/// A generation of individuals.
///
/// Storage is a plain `Vec`: duplicate individuals are allowed, so a freshly
/// initialized population always holds exactly the requested number of
/// members, even when the search space is smaller than that.
#[derive(Debug, Clone)]
pub struct Population<I> {
    individuals: Vec<I>,
}

impl<I: Clone> Population<I> {
    /// Creates `size` independent random individuals.
    pub fn initialize<P, R>(problem: &P, size: usize, rng: &mut R) -> Self
    where
        P: GaProblem<Individual = I>,
        R: Rng,
    {
        let individuals = (0..size).map(|_| problem.create_individual(rng)).collect();
        Self { individuals }
    }

    /// Wraps an existing collection.
    pub fn from_individuals(individuals: Vec<I>) -> Self {
        Self { individuals }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Members in storage order.
    pub fn individuals(&self) -> &[I] {
        &self.individuals
    }

    /// Returns a snapshot of the members sorted by ascending cost, paired
    /// with the sorted costs.
    ///
    /// `costs[i]` must be the cost of the `i`-th member in storage order.
    /// Ties keep their storage order.
    ///
    /// # Panics
    /// Panics if `costs` has a different length than the population.
    pub fn ranked(&self, costs: &[f64]) -> (Vec<&I>, Vec<f64>) {
        assert_eq!(
            costs.len(),
            self.individuals.len(),
            "one cost per individual required"
        );

        let mut order: Vec<usize> = (0..self.individuals.len()).collect();
        order.sort_by(|&a, &b| {
            costs[a]
                .partial_cmp(&costs[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let members = order.iter().map(|&i| &self.individuals[i]).collect();
        let sorted_costs = order.iter().map(|&i| costs[i]).collect();
        (members, sorted_costs)
    }
}
