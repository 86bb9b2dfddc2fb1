//! Optimizer facade.
//!
//! [`Optimizer`] is the single entry point: it validates the strategy and
//! the evaluator against the table, creates the run's random generator,
//! drives the chosen engine step by step, and returns the best sequence
//! seen.
//!
//! Between steps the facade checks the cancellation flag and the optional
//! wall-clock limit, so a run can be time-boxed from outside without losing
//! its best-so-far.

use crate::engine::{SearchEngine, StepOutcome};
use crate::error::{Result, SequencingError};
use crate::fitness::Evaluator;
use crate::ga::{GaConfig, GaEngine};
use crate::orders::{OrderId, OrderTable};
use crate::random::{create_rng, SeqRng};
use crate::solution::Solution;
use crate::tabu::{TabuConfig, TabuEngine};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

const HISTORY_PREALLOC: usize = 4096;

/// Search strategy together with its hyperparameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Generational genetic algorithm.
    Genetic(GaConfig),
    /// Tabu search.
    Tabu(TabuConfig),
}

impl Strategy {
    /// Validates the hyperparameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::Genetic(c) => c.validate(),
            Strategy::Tabu(c) => c.validate(),
        }
        .map_err(SequencingError::InvalidConfig)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Genetic(_) => "ga",
            Strategy::Tabu(_) => "tabu",
        }
    }

    fn max_steps(&self) -> usize {
        match self {
            Strategy::Genetic(c) => c.generations,
            Strategy::Tabu(c) => c.max_iter,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Tabu(TabuConfig::default())
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The full generation/iteration budget was used.
    Completed,
    /// Tabu search found no admissible neighbor and stopped early.
    Converged,
    /// The cancellation flag was raised.
    Cancelled,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// Fewer than two orders; nothing to search.
    Trivial,
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeResult {
    /// Best sequence found, as table row positions.
    pub best: Solution,

    /// Best sequence as external order ids, in dispatch order.
    pub best_order: Vec<OrderId>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Generations or iterations completed.
    pub steps: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-so-far fitness after initialization and after every step.
    pub fitness_history: Vec<f64>,
}

/// Runs one strategy to termination.
///
/// # Usage
///
/// ```
/// use u_sequencing::fitness::PositionWeighted;
/// use u_sequencing::ga::GaConfig;
/// use u_sequencing::optimizer::{Optimizer, Strategy};
/// use u_sequencing::orders::OrderTable;
///
/// let table = OrderTable::from_risks(&[0.9, 0.1, 0.5, 0.2]).unwrap();
/// let result = Optimizer::new(Strategy::Genetic(GaConfig::default()))
///     .with_seed(42)
///     .optimize(&table, &PositionWeighted)
///     .unwrap();
///
/// assert_eq!(result.best_order.len(), 4);
/// assert!(result.best_fitness <= 3.4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    strategy: Strategy,
    seed: Option<u64>,
    time_limit_ms: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Optimizer {
    /// Creates an optimizer for `strategy` with a random seed.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    ///
    /// Checked before every step, so the run may overshoot by one
    /// generation or iteration.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Attaches a cancellation flag, checked before every step.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// The configured strategy.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Validates strategy and run limits.
    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()?;
        if self.time_limit_ms == Some(0) {
            return Err(SequencingError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }

    /// Optimizes the dispatch order of `table` under `evaluator`.
    ///
    /// Fails before any search if the configuration is invalid or the
    /// evaluator rejects the table.
    pub fn optimize<E: Evaluator>(&self, table: &OrderTable, evaluator: &E) -> Result<OptimizeResult> {
        self.validate()?;
        evaluator.validate(table)?;

        if table.len() < 2 {
            debug!(orders = table.len(), "trivial table, skipping search");
            let best = Solution::identity(table.len());
            return Ok(OptimizeResult {
                best_order: best.order_ids(table),
                best,
                best_fitness: 0.0,
                steps: 0,
                termination: Termination::Trivial,
                fitness_history: vec![0.0],
            });
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        info!(
            strategy = self.strategy.name(),
            orders = table.len(),
            seed,
            "starting sequencing run"
        );

        let max_steps = self.strategy.max_steps();
        let result = match &self.strategy {
            Strategy::Genetic(config) => {
                let engine = GaEngine::new(table, evaluator, config.clone(), &mut rng)?;
                self.drive(engine, max_steps, table, &mut rng)
            }
            Strategy::Tabu(config) => {
                let engine = TabuEngine::new(table, evaluator, config.clone(), &mut rng)?;
                self.drive(engine, max_steps, table, &mut rng)
            }
        };

        info!(
            strategy = self.strategy.name(),
            steps = result.steps,
            best_fitness = result.best_fitness,
            termination = ?result.termination,
            "sequencing run finished"
        );
        Ok(result)
    }

    fn drive<S: SearchEngine>(
        &self,
        mut engine: S,
        max_steps: usize,
        table: &OrderTable,
        rng: &mut SeqRng,
    ) -> OptimizeResult {
        let start = Instant::now();
        let mut fitness_history = Vec::with_capacity(max_steps.min(HISTORY_PREALLOC) + 1);
        fitness_history.push(engine.best().1);

        let mut termination = Termination::Completed;
        for _ in 0..max_steps {
            if let Some(stop) = self.interrupted(start) {
                debug!(steps = engine.steps(), reason = ?stop, "run interrupted");
                termination = stop;
                break;
            }
            match engine.step(rng) {
                StepOutcome::Advanced => fitness_history.push(engine.best().1),
                StepOutcome::Converged => {
                    termination = Termination::Converged;
                    break;
                }
            }
        }

        let (best, best_fitness) = engine.best();
        OptimizeResult {
            best_order: best.order_ids(table),
            best: best.clone(),
            best_fitness,
            steps: engine.steps(),
            termination,
            fitness_history,
        }
    }

    fn interrupted(&self, start: Instant) -> Option<Termination> {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Some(Termination::Cancelled);
            }
        }
        if let Some(limit) = self.time_limit_ms {
            if start.elapsed().as_millis() >= u128::from(limit) {
                return Some(Termination::TimeLimit);
            }
        }
        None
    }
}

/// One-call form of [`Optimizer::optimize`] with a fixed seed.
pub fn optimize<E: Evaluator>(
    table: &OrderTable,
    evaluator: &E,
    strategy: Strategy,
    seed: u64,
) -> Result<OptimizeResult> {
    Optimizer::new(strategy).with_seed(seed).optimize(table, evaluator)
}
