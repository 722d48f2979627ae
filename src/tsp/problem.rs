//! GA problem definition for the symmetric TSP.
//!
//! Individuals are [`Tour`]s. Evaluation is the cyclic tour length,
//! crossover is OX producing one child, and mutation is a single
//! probabilistic swap.

use rand::Rng;

use super::distance::DistanceMatrix;
use super::tour::{tour_cost, Tour};
use crate::ga::operators::{order_crossover, shuffled_permutation, swap_mutation};
use crate::ga::GaProblem;

/// GA problem for the symmetric Traveling Salesman Problem.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{GaConfig, GaEngine};
/// use u_tsp::tsp::{DistanceMatrix, TspProblem};
///
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let problem = TspProblem::new(dm).unwrap();
/// let config = GaConfig::default().with_generations(50).with_seed(1);
///
/// let mut engine = GaEngine::new(&problem, config).unwrap();
/// let result = engine.evolve();
/// assert!(result.best_cost >= 4.0 - 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TspProblem {
    distances: DistanceMatrix,
}

impl TspProblem {
    /// Creates a TSP problem over the given distances.
    ///
    /// Returns `Err` for fewer than two cities: crossover cut points and
    /// two-position swaps are undefined there.
    pub fn new(distances: DistanceMatrix) -> Result<Self, String> {
        if distances.size() < 2 {
            return Err(format!(
                "at least 2 cities are required, got {}",
                distances.size()
            ));
        }
        Ok(Self { distances })
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.distances.size()
    }
}

impl GaProblem for TspProblem {
    type Individual = Tour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::new(shuffled_permutation(self.num_cities(), rng))
    }

    fn evaluate(&self, tour: &Tour) -> f64 {
        tour_cost(&self.distances, tour.cities())
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        Tour::new(order_crossover(parent1.cities(), parent2.cities(), rng))
    }

    fn mutate<R: Rng>(&self, tour: &mut Tour, probability: f64, rng: &mut R) -> bool {
        swap_mutation(tour.cities_mut(), probability, rng)
    }
}
