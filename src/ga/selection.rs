//! Tournament selection.
//!
//! Each tournament draws `k` distinct entrants uniformly from the current
//! population and keeps the one with the lowest fitness. Tournaments are
//! independent, so an individual may win (and be copied into the pool)
//! many times.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

/// Runs one tournament and returns the winner's index.
///
/// `k` is capped at the population size. Ties go to the entrant drawn
/// first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn tournament<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let n = fitnesses.len();
    let k = k.clamp(1, n);

    let mut entrants = index::sample(rng, n, k).into_iter();
    let mut best_idx = entrants.next().expect("k >= 1");
    for idx in entrants {
        if fitnesses[idx] < fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fills a mating pool the same size as the population.
///
/// Returns indices into the population, one per tournament, in the order
/// the tournaments were run.
pub fn select_pool<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> Vec<usize> {
    (0..fitnesses.len())
        .map(|_| tournament(fitnesses, k, rng))
        .collect()
}
