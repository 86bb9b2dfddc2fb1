//! Generational GA engine.
//!
//! [`GaEngine`] holds one population and advances it one generation per
//! [`step`](SearchEngine::step):
//! selection → crossover → mutation → evaluation.
//!
//! The population is replaced wholesale every generation; nothing survives
//! by elitism. The best individual ever evaluated is kept outside the
//! population as best-so-far.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::select_pool;
use crate::engine::{argmin, evaluate_all, SearchEngine, StepOutcome};
use crate::error::{Result, SequencingError};
use crate::fitness::Evaluator;
use crate::orders::OrderTable;
use crate::solution::Solution;
use rand::Rng;
use tracing::{debug, trace};

/// Genetic Algorithm over order permutations.
///
/// # Usage
///
/// ```
/// use u_sequencing::engine::SearchEngine;
/// use u_sequencing::fitness::PositionWeighted;
/// use u_sequencing::ga::{GaConfig, GaEngine};
/// use u_sequencing::orders::OrderTable;
/// use u_sequencing::random::create_rng;
///
/// let table = OrderTable::from_risks(&[0.9, 0.1, 0.5, 0.2]).unwrap();
/// let config = GaConfig::default().with_population_size(10);
/// let mut rng = create_rng(42);
///
/// let mut engine = GaEngine::new(&table, &PositionWeighted, config, &mut rng).unwrap();
/// for _ in 0..20 {
///     engine.step(&mut rng);
/// }
/// let (best, fitness) = engine.best();
/// assert!(best.is_valid_for(4));
/// assert!(fitness <= 3.4);
/// ```
pub struct GaEngine<'a, E: Evaluator> {
    table: &'a OrderTable,
    evaluator: &'a E,
    config: GaConfig,
    population: Vec<Solution>,
    fitnesses: Vec<f64>,
    best: Solution,
    best_fitness: f64,
    generation: usize,
}

impl<'a, E: Evaluator> GaEngine<'a, E> {
    /// Builds and evaluates the initial population.
    ///
    /// Fails if the configuration is invalid or `evaluator` rejects `table`.
    ///
    /// Tables with fewer than two orders need no search: the engine starts
    /// converged on the only possible sequence with fitness 0 and draws no
    /// randomness.
    pub fn new<R: Rng>(
        table: &'a OrderTable,
        evaluator: &'a E,
        config: GaConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate().map_err(SequencingError::InvalidConfig)?;
        evaluator.validate(table)?;

        let n = table.len();
        if n < 2 {
            return Ok(Self {
                table,
                evaluator,
                config,
                population: Vec::new(),
                fitnesses: Vec::new(),
                best: Solution::identity(n),
                best_fitness: 0.0,
                generation: 0,
            });
        }

        let population: Vec<Solution> = (0..config.population_size)
            .map(|_| Solution::random(n, rng))
            .collect();
        let fitnesses = evaluate_all(evaluator, table, &population, config.parallel);

        let best_idx = argmin(&fitnesses).expect("population is non-empty");
        let best = population[best_idx].clone();
        let best_fitness = fitnesses[best_idx];
        debug!(
            population = config.population_size,
            orders = n,
            best_fitness,
            "GA initialized"
        );

        Ok(Self {
            table,
            evaluator,
            config,
            population,
            fitnesses,
            best,
            best_fitness,
            generation: 0,
        })
    }

    /// Current population.
    pub fn population(&self) -> &[Solution] {
        &self.population
    }

    /// Fitness of each member of [`population`](Self::population).
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    fn breed<R: Rng>(&self, rng: &mut R) -> Vec<Solution> {
        let pool = select_pool(&self.fitnesses, self.config.tournament_size, rng);

        let mut offspring = Vec::with_capacity(self.config.population_size);
        for pair in pool.chunks_exact(2) {
            let p1 = &self.population[pair[0]];
            let p2 = &self.population[pair[1]];
            offspring.push(order_crossover(p1, p2, rng));
            offspring.push(order_crossover(p2, p1, rng));
        }

        for child in &mut offspring {
            swap_mutation(child, self.config.mutation_rate, rng);
        }
        offspring
    }
}

impl<E: Evaluator> SearchEngine for GaEngine<'_, E> {
    fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        if self.population.is_empty() {
            return StepOutcome::Converged;
        }

        let offspring = self.breed(rng);
        self.fitnesses = evaluate_all(self.evaluator, self.table, &offspring, self.config.parallel);
        self.population = offspring;
        self.generation += 1;

        let gen_idx = argmin(&self.fitnesses).expect("population is non-empty");
        let gen_best = self.fitnesses[gen_idx];
        if gen_best < self.best_fitness {
            self.best = self.population[gen_idx].clone();
            self.best_fitness = gen_best;
            debug!(generation = self.generation, best_fitness = gen_best, "GA improved");
        } else {
            trace!(generation = self.generation, gen_best, "GA generation");
        }

        StepOutcome::Advanced
    }

    fn best(&self) -> (&Solution, f64) {
        (&self.best, self.best_fitness)
    }

    fn steps(&self) -> usize {
        self.generation
    }
}

// ============================================================================
// Tests
// ============================================================================
