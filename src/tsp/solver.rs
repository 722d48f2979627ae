//! One-call TSP solving on top of [`GaEngine`].

use super::distance::DistanceMatrix;
use super::problem::TspProblem;
use super::tour::Tour;
use crate::ga::{GaConfig, GaEngine, GaResult};

/// A tour together with its cyclic cost.
#[derive(Debug, Clone, PartialEq)]
pub struct TspSolution {
    /// The visiting order.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub cost: f64,
}

impl From<GaResult<Tour>> for TspSolution {
    fn from(result: GaResult<Tour>) -> Self {
        Self {
            tour: result.best,
            cost: result.best_cost,
        }
    }
}

/// Outcome of [`TspSolver::solve_with_checkpoints`].
#[derive(Debug, Clone)]
pub struct CheckpointedSolution {
    /// Result of the first evolve call.
    pub first: TspSolution,
    /// Best result among the later checkpoints of the same run.
    pub best: TspSolution,
    /// Cost recorded at every later checkpoint, in order.
    pub checkpoint_costs: Vec<f64>,
}

/// Solves a TSP instance with a [`GaConfig`].
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GaConfig;
/// use u_tsp::tsp::{DistanceMatrix, TspSolver};
///
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let solver = TspSolver::new(dm, GaConfig::default().with_generations(200).with_seed(3)).unwrap();
/// let solution = solver.solve().unwrap();
/// assert!(solution.tour.is_valid(4));
/// assert!(solution.cost >= 4.0 - 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver {
    problem: TspProblem,
    config: GaConfig,
}

impl TspSolver {
    /// Creates a solver, checking the instance and the configuration.
    pub fn new(distances: DistanceMatrix, config: GaConfig) -> Result<Self, String> {
        config.validate()?;
        let problem = TspProblem::new(distances)?;
        Ok(Self { problem, config })
    }

    /// The underlying GA problem.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// The solver's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Creates a fresh engine for this instance.
    pub fn engine(&self) -> Result<GaEngine<'_, TspProblem>, String> {
        GaEngine::new(&self.problem, self.config.clone())
    }

    /// Runs one evolve block and returns the best tour of the final population.
    pub fn solve(&self) -> Result<TspSolution, String> {
        let mut engine = self.engine()?;
        Ok(engine.evolve().into())
    }

    /// Runs one evolve block, then `checkpoints` more on the same population,
    /// returning the first result and the best of the later ones.
    ///
    /// Returns `Err` if `checkpoints` is zero.
    pub fn solve_with_checkpoints(
        &self,
        checkpoints: usize,
    ) -> Result<CheckpointedSolution, String> {
        if checkpoints == 0 {
            return Err("at least one checkpoint is required".into());
        }

        let mut engine = self.engine()?;
        let first = engine.evolve().into();
        let later = engine.run_checkpoints(checkpoints);
        let checkpoint_costs = later.results().iter().map(|r| r.best_cost).collect();

        Ok(CheckpointedSolution {
            first,
            best: later.into_best().into(),
            checkpoint_costs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_new_rejects_bad_inputs() {
        assert!(TspSolver::new(DistanceMatrix::new(1), GaConfig::default()).is_err());
        assert!(TspSolver::new(square(), GaConfig::default().with_population_size(0)).is_err());
    }

    #[test]
    fn test_solve_unit_square() {
        let config = GaConfig::default().with_generations(200).with_seed(11);
        let solution = TspSolver::new(square(), config)
            .expect("valid")
            .solve()
            .expect("valid");
        assert!(solution.tour.is_valid(4));
        assert!((solution.cost - 4.0).abs() < 1e-9, "cost {}", solution.cost);
        assert_eq!(solution.cost, solution.tour.cost(&square()));
    }

    #[test]
    fn test_checkpoints_report_minimum() {
        let dm = DistanceMatrix::from_coordinates(&[
            (0.0, 0.0),
            (5.0, 1.0),
            (9.0, 4.0),
            (7.0, 9.0),
            (2.0, 8.0),
            (4.0, 5.0),
            (1.0, 3.0),
            (8.0, 1.0),
        ]);
        let config = GaConfig::default().with_generations(20).with_seed(5);
        let solver = TspSolver::new(dm, config).expect("valid");
        let out = solver.solve_with_checkpoints(5).expect("valid");

        assert_eq!(out.checkpoint_costs.len(), 5);
        let min = out
            .checkpoint_costs
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(out.best.cost, min);
        assert!(out.best.cost <= out.first.cost);
        assert!(out.best.tour.is_valid(8));
    }

    #[test]
    fn test_zero_checkpoints_rejected() {
        let solver = TspSolver::new(square(), GaConfig::default()).expect("valid");
        assert!(solver.solve_with_checkpoints(0).is_err());
    }
}
