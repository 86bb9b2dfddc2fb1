//! Permutation-preserving genetic operators.
//!
//! Both operators map valid permutations to valid permutations by
//! construction, so no repair step is ever needed.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX1): Davis (1985) — keeps a slice of one parent
//!   in place and the relative order of the other
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position transposition with a random partner
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::distinct_pair;
use crate::solution::Solution;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX1) producing one child.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Draw two distinct cut points and sort them into `a < b`
/// 2. Copy `parent1[a..b]` into the child at the same positions
/// 3. Fill the remaining positions left to right with the elements of
///    `parent2` not in the copied slice, in `parent2`'s order
///
/// Call twice with the parents swapped to get both children of a pair.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &Solution, parent2: &Solution, rng: &mut R) -> Solution {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.clone();
    }

    let (i, j) = distinct_pair(n, rng);
    ox1_child(parent1, parent2, i.min(j), i.max(j))
}

/// Builds the OX1 child for the fixed slice `[a, b)`.
///
/// # Panics
/// Panics if `a > b`, `b > n`, or the parents are not permutations of
/// `0..n`.
pub fn ox1_child(parent1: &Solution, parent2: &Solution, a: usize, b: usize) -> Solution {
    let n = parent1.len();
    assert!(a <= b && b <= n, "invalid cut points [{a}, {b}) for length {n}");

    let p1 = parent1.positions();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in a..b {
        child[i] = p1[i];
        in_segment[p1[i]] = true;
    }

    let mut fill = parent2.iter().filter(|&v| !in_segment[v]);
    for (i, slot) in child.iter_mut().enumerate() {
        if i < a || i >= b {
            *slot = fill.next().expect("parents must be permutations of the same rows");
        }
    }

    Solution::from_positions(child)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: each position, with probability `rate`, trades places with
/// a uniformly chosen different position.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(solution: &mut Solution, rate: f64, rng: &mut R) {
    let n = solution.len();
    if n < 2 {
        return;
    }
    let perm = solution.positions_mut();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
