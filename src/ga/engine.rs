//! Resumable GA evolutionary loop.
//!
//! [`GaEngine`] owns a population across calls: every [`evolve`](GaEngine::evolve)
//! continues from the current population instead of restarting, so a driver
//! can take several checkpoints of one continuous run.
//!
//! One generation:
//!
//! 1. Rank the population by ascending cost
//! 2. Copy the top `floor(population_size * elite_ratio)` unchanged
//! 3. Until the population is full: select two parents, cross them over,
//!    mutate the child, append it
//! 4. Replace the population and re-evaluate it

use super::checkpoint::Checkpoints;
use super::config::GaConfig;
use super::population::Population;
use super::random::rng_from_seed;
use super::types::GaProblem;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Result of one evolve block.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Lowest-cost member of the population at the end of the block.
    ///
    /// Also the best seen so far only while `elite_count() >= 1`; with no
    /// elites the population minimum can get worse between generations.
    pub best: I,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Generations run in this block.
    pub generations: usize,

    /// Generations run by the engine since construction, including this block.
    pub total_generations: usize,

    /// Population minimum before the block, then after each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the GA loop over a persistent population.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let mut engine = GaEngine::new(&problem, config)?;
/// let first = engine.evolve();
/// let later = engine.run_checkpoints(10);
/// assert!(later.best().best_cost <= first.best_cost);
/// ```
pub struct GaEngine<'a, P: GaProblem, R: Rng = StdRng> {
    problem: &'a P,
    config: GaConfig,
    rng: R,
    population: Population<P::Individual>,
    costs: Vec<f64>,
    generation: usize,
}

impl<'a, P: GaProblem> GaEngine<'a, P, StdRng> {
    /// Creates an engine seeded from `config.seed` (or OS entropy) and
    /// initializes generation 0.
    pub fn new(problem: &'a P, config: GaConfig) -> Result<Self, String> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<'a, P: GaProblem, R: Rng> GaEngine<'a, P, R> {
    /// Creates an engine that draws all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(problem: &'a P, config: GaConfig, mut rng: R) -> Result<Self, String> {
        config.validate()?;
        if config.elite_count() == 0 && config.elite_ratio > 0.0 {
            warn!(
                "elite_ratio {} rounds down to 0 elites for population {}; best cost may regress",
                config.elite_ratio, config.population_size
            );
        }

        let population = Population::initialize(problem, config.population_size, &mut rng);
        let costs = evaluate_population(problem, population.individuals(), config.parallel);

        info!(
            "initialized population of {} (elites {}, mutation rate {}, selection {:?})",
            config.population_size,
            config.elite_count(),
            config.mutation_rate,
            config.selection
        );

        Ok(Self {
            problem,
            config,
            rng,
            population,
            costs,
            generation: 0,
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population.
    pub fn population(&self) -> &Population<P::Individual> {
        &self.population
    }

    /// Generations run since construction.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Lowest-cost member of the current population and its cost.
    pub fn best(&self) -> (&P::Individual, f64) {
        let idx = best_index(&self.costs);
        (&self.population.individuals()[idx], self.costs[idx])
    }

    /// Runs exactly one generation and returns the new population minimum.
    pub fn step(&mut self) -> f64 {
        let (ranked, ranked_costs) = self.population.ranked(&self.costs);

        let elite_count = self.config.elite_count().min(ranked.len());
        let mut next: Vec<P::Individual> = Vec::with_capacity(self.config.population_size);
        next.extend(ranked[..elite_count].iter().map(|&ind| ind.clone()));

        while next.len() < self.config.population_size {
            let p1 = self.config.selection.select(&ranked_costs, &mut self.rng);
            let p2 = self.config.selection.select(&ranked_costs, &mut self.rng);

            let mut child = self.problem.crossover(ranked[p1], ranked[p2], &mut self.rng);
            self.problem
                .mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            next.push(child);
        }

        self.population = Population::from_individuals(next);
        self.costs = evaluate_population(
            self.problem,
            self.population.individuals(),
            self.config.parallel,
        );
        self.generation += 1;

        let best_cost = self.costs[best_index(&self.costs)];
        debug!("generation {}: best cost {best_cost}", self.generation);
        self.problem.on_generation(self.generation, best_cost);
        best_cost
    }

    /// Runs `config.generations` further generations.
    pub fn evolve(&mut self) -> GaResult<P::Individual> {
        self.evolve_generations(self.config.generations)
    }

    /// Runs `count` further generations from the current population.
    pub fn evolve_generations(&mut self, count: usize) -> GaResult<P::Individual> {
        let mut cost_history = Vec::with_capacity(count + 1);
        cost_history.push(self.best().1);

        for _ in 0..count {
            cost_history.push(self.step());
        }

        let (best, best_cost) = self.best();
        info!(
            "evolved {count} generations (total {}): best cost {best_cost}",
            self.generation
        );

        GaResult {
            best: best.clone(),
            best_cost,
            generations: count,
            total_generations: self.generation,
            cost_history,
        }
    }

    /// Calls [`evolve`](Self::evolve) `count` times, recording each result.
    ///
    /// All checkpoints come from the same continuous run.
    ///
    /// # Panics
    /// Panics if `count` is zero.
    pub fn run_checkpoints(&mut self, count: usize) -> Checkpoints<P::Individual> {
        assert!(count > 0, "at least one checkpoint is required");

        let results = (0..count).map(|_| self.evolve()).collect();
        let checkpoints = Checkpoints::new(results);
        info!(
            "best of {count} checkpoints: cost {}",
            checkpoints.best().best_cost
        );
        checkpoints
    }
}

/// Evaluates every individual; the result is aligned with `individuals`.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    individuals: &[P::Individual],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return individuals
            .par_iter()
            .map(|ind| problem.evaluate(ind))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    individuals.iter().map(|ind| problem.evaluate(ind)).collect()
}

/// Index of the lowest cost; the first one on ties.
fn best_index(costs: &[f64]) -> usize {
    costs
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
