//! Genetic Algorithm machinery.
//!
//! A generic GA built on one trait, [`GaProblem`], which specifies how to
//! create, evaluate, cross over, and mutate individuals. The TSP plugs into
//! it through [`crate::tsp::TspProblem`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elitism, mutation, selection)
//! - [`GaEngine`]: Resumable evolutionary loop over a persistent population
//! - [`GaResult`]: Outcome of one evolve block
//! - [`Checkpoints`]: Best-of selection over consecutive evolve blocks
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover (OX) and swap mutation
//! - [`random`]: Seedable generator construction
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod checkpoint;
mod config;
mod engine;
pub mod operators;
mod population;
pub mod random;
mod selection;
mod types;

pub use checkpoint::{best_of, Checkpoints};
pub use config::GaConfig;
pub use engine::{GaEngine, GaResult};
pub use population::Population;
pub use selection::Selection;
pub use types::GaProblem;
