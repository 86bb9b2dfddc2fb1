//! Candidate dispatch sequences.
//!
//! A [`Solution`] is a permutation of table row positions `0..n`: each row
//! appears exactly once and the vector order is the proposed dispatch order.
//! Engines copy solutions when they branch (crossover, neighbor generation);
//! a solution is never shared mutably between population slots.

use crate::orders::{OrderId, OrderTable};
use crate::random::shuffle;
use rand::Rng;

/// A full permutation of order-table rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution(Vec<usize>);

impl Solution {
    /// The table order `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Solution((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    ///
    /// For `n <= 1` the result is fixed and no randomness is drawn.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (0..n).collect();
        if n > 1 {
            shuffle(&mut perm, rng);
        }
        Solution(perm)
    }

    /// Wraps raw row positions. Validity is not checked; see
    /// [`is_valid_for`](Self::is_valid_for).
    pub fn from_positions(positions: Vec<usize>) -> Self {
        Solution(positions)
    }

    /// Builds a solution from external ids, or `None` if any id is unknown
    /// or the ids do not cover the table exactly once.
    pub fn from_order_ids(ids: &[OrderId], table: &OrderTable) -> Option<Self> {
        let positions = ids
            .iter()
            .map(|&id| table.position_of(id))
            .collect::<Option<Vec<_>>>()?;
        let solution = Solution(positions);
        solution.is_valid_for(table.len()).then_some(solution)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Row positions in dispatch order.
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [usize] {
        &mut self.0
    }

    /// Iterates row positions in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Exchanges the rows at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// External ids in dispatch order.
    pub fn order_ids(&self, table: &OrderTable) -> Vec<OrderId> {
        self.iter().map(|pos| table.get(pos).id).collect()
    }

    /// Whether this is a bijection onto `0..n`.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.0 {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}
