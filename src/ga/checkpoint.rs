//! Checkpoint-and-pick-best over one continuous run.

use super::engine::GaResult;

/// Results recorded after consecutive evolve blocks of the same engine.
#[derive(Debug, Clone)]
pub struct Checkpoints<I> {
    results: Vec<GaResult<I>>,
}

impl<I> Checkpoints<I> {
    /// Wraps checkpoint results in the order they were taken.
    ///
    /// # Panics
    /// Panics if `results` is empty.
    pub fn new(results: Vec<GaResult<I>>) -> Self {
        assert!(!results.is_empty(), "at least one checkpoint is required");
        Self { results }
    }

    /// All recorded results, oldest first.
    pub fn results(&self) -> &[GaResult<I>] {
        &self.results
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always `false`; a `Checkpoints` holds at least one result.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The checkpoint with the lowest cost.
    pub fn best(&self) -> &GaResult<I> {
        best_of(&self.results).expect("checkpoints are never empty")
    }

    /// Consumes the collection, returning the lowest-cost checkpoint.
    pub fn into_best(self) -> GaResult<I> {
        let idx = best_position(&self.results).expect("checkpoints are never empty");
        self.results
            .into_iter()
            .nth(idx)
            .expect("index comes from the same vector")
    }
}

/// Returns the result with minimum `best_cost`, the earliest one on ties.
///
/// `None` for an empty slice.
pub fn best_of<I>(results: &[GaResult<I>]) -> Option<&GaResult<I>> {
    best_position(results).map(|i| &results[i])
}

fn best_position<I>(results: &[GaResult<I>]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .min_by(|a, b| {
            a.1.best_cost
                .partial_cmp(&b.1.best_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}
