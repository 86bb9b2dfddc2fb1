//! Bounded tabu memory.
//!
//! A FIFO of recently committed sequences with a hash index over the full
//! sequence, so membership tests stay O(n) in the sequence length rather
//! than O(tabu_size · n).

use crate::solution::Solution;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

/// Recently visited solutions, oldest first.
///
/// # Examples
///
/// ```
/// use u_sequencing::solution::Solution;
/// use u_sequencing::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// let a = Solution::from_positions(vec![0, 1, 2]);
/// let b = Solution::from_positions(vec![1, 0, 2]);
/// let c = Solution::from_positions(vec![2, 1, 0]);
///
/// memory.push(a.clone());
/// memory.push(b.clone());
/// memory.push(c.clone());
///
/// assert_eq!(memory.len(), 2);
/// assert!(!memory.contains(&a));
/// assert!(memory.contains(&b) && memory.contains(&c));
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<Solution>,
    // multiplicity, so evicting one copy keeps later copies tabu
    index: HashMap<Solution, usize>,
}

impl TabuMemory {
    /// Creates an empty memory holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::new(),
            index: HashMap::new(),
        }
    }

    /// Records `solution`, evicting the oldest entry if over capacity.
    pub fn push(&mut self, solution: Solution) {
        if self.capacity == 0 {
            return;
        }
        *self.index.entry(solution.clone()).or_insert(0) += 1;
        self.queue.push_back(solution);

        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.forget(old);
            }
        }
    }

    fn forget(&mut self, solution: Solution) {
        if let Entry::Occupied(mut e) = self.index.entry(solution) {
            *e.get_mut() -= 1;
            if *e.get() == 0 {
                e.remove();
            }
        }
    }

    /// Whether `solution` is currently tabu.
    pub fn contains(&self, solution: &Solution) -> bool {
        self.index.contains_key(solution)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.queue.iter()
    }
}
