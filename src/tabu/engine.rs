//! Tabu Search engine.
//!
//! # Algorithm
//!
//! 1. Draw one random sequence; it is both current and best
//! 2. At each iteration:
//!    a. Sample `neighbor_size` single-swap neighbors of current
//!    b. Score them and keep the best one not in tabu memory
//!    c. Move to it even if it is worse than current
//!    d. Update best-so-far on strict improvement, then remember the move
//! 3. Terminate after `max_iter` iterations, or early when every sampled
//!    neighbor is tabu
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::engine::{evaluate_all, SearchEngine, StepOutcome};
use crate::error::{Result, SequencingError};
use crate::fitness::Evaluator;
use crate::orders::OrderTable;
use crate::random::distinct_pair;
use crate::solution::Solution;
use rand::Rng;
use tracing::{debug, trace};

/// Single-trajectory Tabu Search over order permutations.
pub struct TabuEngine<'a, E: Evaluator> {
    table: &'a OrderTable,
    evaluator: &'a E,
    config: TabuConfig,
    current: Solution,
    current_fitness: f64,
    best: Solution,
    best_fitness: f64,
    memory: TabuMemory,
    iteration: usize,
    starved: bool,
}

impl<'a, E: Evaluator> TabuEngine<'a, E> {
    /// Draws and scores the initial sequence.
    ///
    /// Fails if the configuration is invalid or `evaluator` rejects `table`.
    ///
    /// Tables with fewer than two orders admit no swap: the engine starts
    /// converged with fitness 0 and draws no randomness.
    pub fn new<R: Rng>(
        table: &'a OrderTable,
        evaluator: &'a E,
        config: TabuConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate().map_err(SequencingError::InvalidConfig)?;
        evaluator.validate(table)?;

        let n = table.len();
        let memory = TabuMemory::new(config.tabu_size);
        if n < 2 {
            let trivial = Solution::identity(n);
            return Ok(Self {
                table,
                evaluator,
                config,
                current: trivial.clone(),
                current_fitness: 0.0,
                best: trivial,
                best_fitness: 0.0,
                memory,
                iteration: 0,
                starved: true,
            });
        }

        let current = Solution::random(n, rng);
        let current_fitness = evaluator.evaluate(&current, table);
        debug!(orders = n, initial_fitness = current_fitness, "tabu search initialized");

        Ok(Self {
            table,
            evaluator,
            config,
            best: current.clone(),
            best_fitness: current_fitness,
            current,
            current_fitness,
            memory,
            iteration: 0,
            starved: false,
        })
    }

    /// The sequence the search currently stands on.
    pub fn current(&self) -> (&Solution, f64) {
        (&self.current, self.current_fitness)
    }

    /// Recently committed sequences.
    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Samples single-swap neighbors of the current sequence.
    fn neighbors<R: Rng>(&self, rng: &mut R) -> Vec<Solution> {
        let n = self.current.len();
        (0..self.config.neighbor_size)
            .map(|_| {
                let mut neighbor = self.current.clone();
                let (i, j) = distinct_pair(n, rng);
                neighbor.swap(i, j);
                neighbor
            })
            .collect()
    }
}

impl<E: Evaluator> SearchEngine for TabuEngine<'_, E> {
    fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        if self.starved {
            return StepOutcome::Converged;
        }

        let neighbors = self.neighbors(rng);
        let fitnesses = evaluate_all(self.evaluator, self.table, &neighbors, self.config.parallel);

        let mut candidate: Option<usize> = None;
        for (i, neighbor) in neighbors.iter().enumerate() {
            if self.memory.contains(neighbor) {
                continue;
            }
            if candidate.is_none_or(|c| fitnesses[i] < fitnesses[c]) {
                candidate = Some(i);
            }
        }

        let Some(idx) = candidate else {
            self.starved = true;
            debug!(iteration = self.iteration, "tabu search starved: all neighbors tabu");
            return StepOutcome::Converged;
        };

        let fitness = fitnesses[idx];
        let chosen = neighbors
            .into_iter()
            .nth(idx)
            .expect("candidate index is in range");
        self.iteration += 1;

        if fitness < self.best_fitness {
            self.best = chosen.clone();
            self.best_fitness = fitness;
            debug!(iteration = self.iteration, best_fitness = fitness, "tabu improved");
        } else {
            trace!(iteration = self.iteration, fitness, "tabu move");
        }

        self.current = chosen.clone();
        self.current_fitness = fitness;
        self.memory.push(chosen);

        StepOutcome::Advanced
    }

    fn best(&self) -> (&Solution, f64) {
        (&self.best, self.best_fitness)
    }

    fn steps(&self) -> usize {
        self.iteration
    }
}
