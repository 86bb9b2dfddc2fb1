//! Step-wise search engine contract.
//!
//! The optimizer facade drives an engine one step at a time (one GA
//! generation or one tabu iteration), passing the run's single random
//! generator into every call. Between steps it checks for cancellation and
//! records the best-so-far fitness.

use crate::fitness::Evaluator;
use crate::orders::OrderTable;
use crate::solution::Solution;
use rand::Rng;
use rayon::prelude::*;

/// What happened during one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The engine advanced and can continue.
    Advanced,
    /// Nothing left to explore: a trivial instance, or every tabu neighbor
    /// was forbidden. Further steps would be no-ops.
    Converged,
}

/// A search engine that advances one step at a time.
pub trait SearchEngine {
    /// Performs one generation or iteration.
    fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome;

    /// Best solution seen so far and its fitness.
    fn best(&self) -> (&Solution, f64);

    /// Number of completed steps.
    fn steps(&self) -> usize;
}

/// Scores a batch of candidates, in parallel when requested.
///
/// Results are returned in candidate order regardless of how evaluation was
/// scheduled, so parallelism never changes the outcome of a run.
pub(crate) fn evaluate_all<E: Evaluator>(
    evaluator: &E,
    table: &OrderTable,
    candidates: &[Solution],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        candidates
            .par_iter()
            .map(|s| evaluator.evaluate(s, table))
            .collect()
    } else {
        candidates
            .iter()
            .map(|s| evaluator.evaluate(s, table))
            .collect()
    }
}

/// Index of the first minimum in `fitnesses`.
pub(crate) fn argmin(fitnesses: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &f) in fitnesses.iter().enumerate() {
        if best.is_none_or(|b| f < fitnesses[b]) {
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::PositionWeighted;

    #[test]
    fn test_argmin_first_wins_ties() {
        assert_eq!(argmin(&[3.0, 1.0, 2.0, 1.0]), Some(1));
        assert_eq!(argmin(&[]), None);
        assert_eq!(argmin(&[5.0]), Some(0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = OrderTable::from_risks(&[0.9, 0.1, 0.5, 0.2, 0.7]).unwrap();
        let mut rng = crate::random::create_rng(1);
        let candidates: Vec<Solution> = (0..64).map(|_| Solution::random(5, &mut rng)).collect();

        let seq = evaluate_all(&PositionWeighted, &table, &candidates, false);
        let par = evaluate_all(&PositionWeighted, &table, &candidates, true);
        assert_eq!(seq, par);
    }
}
