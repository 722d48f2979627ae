//! Core trait definition for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and a
//! domain-specific problem such as the TSP.

use rand::Rng;

/// Defines a GA optimization problem.
///
/// Implementors supply the four domain-specific pieces of a GA:
///
/// 1. **Initialization**: How to create a random individual
/// 2. **Evaluation**: How to compute an individual's cost
/// 3. **Crossover**: How to derive one child from two parents
/// 4. **Mutation**: How to perturb a freshly built child
///
/// Costs are minimized: a lower value from [`evaluate`](GaProblem::evaluate)
/// ranks an individual higher.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the engine may evaluate a
/// population in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync;

    /// Creates a random individual.
    ///
    /// Called once per slot during population initialization.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the cost of an individual. Lower is better.
    ///
    /// Must be a pure function of the individual: the engine re-evaluates
    /// every population it builds and never carries costs forward.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one child by recombining two parents.
    ///
    /// Neither parent is modified.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates a freshly created child in place with the given probability.
    ///
    /// Returns `true` if the child was changed.
    fn mutate<R: Rng>(
        &self,
        individual: &mut Self::Individual,
        probability: f64,
        rng: &mut R,
    ) -> bool;

    /// Called at the end of each generation with the best cost in the new
    /// population.
    ///
    /// `generation` counts from 1 and keeps increasing across resumed
    /// evolve calls. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_cost: f64) {}
}
