//! Symmetric Traveling Salesman Problem.
//!
//! - [`DistanceMatrix`]: read-only pairwise distances
//! - [`Tour`] and [`tour_cost`]: candidate routes and their cyclic length
//! - [`TspProblem`]: the [`GaProblem`](crate::ga::GaProblem) implementation
//! - [`TspSolver`]: one-call solving, including the checkpointed driver

mod distance;
mod problem;
mod solver;
mod tour;

pub use distance::DistanceMatrix;
pub use problem::TspProblem;
pub use solver::{CheckpointedSolution, TspSolution, TspSolver};
pub use tour::{tour_cost, Tour};
