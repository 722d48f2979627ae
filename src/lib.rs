//! Genetic-algorithm heuristic solver for the symmetric Traveling Salesman
//! Problem.
//!
//! Given a pairwise distance matrix, searches for a short closed tour that
//! visits every city exactly once. The search is heuristic: it runs a fixed
//! number of generations and reports the best tour it has, with no
//! optimality guarantee.
//!
//! - **[`ga`]**: Generic GA machinery. Elitist generational loop over a
//!   persistent, resumable population; uniform, tournament, roulette and
//!   rank parent selection; order crossover (OX) and swap mutation.
//! - **[`tsp`]**: Distance matrix, tours and their cyclic cost, and the
//!   TSP plug-in for the GA.
//! - **[`io`]**: Line-oriented instance parser and tour formatter.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::GaConfig;
//! use u_tsp::tsp::{DistanceMatrix, TspSolver};
//!
//! let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let solver = TspSolver::new(dm, GaConfig::default().with_seed(42)).unwrap();
//! let solution = solver.solve().unwrap();
//! assert!((solution.cost - 4.0).abs() < 1e-9);
//! ```

pub mod ga;
pub mod io;
pub mod tsp;
