//! Fitness evaluation for dispatch sequences.
//!
//! Fitness is a scalar cost; lower is better. The engines are agnostic to
//! how a sequence is scored: anything implementing [`Evaluator`] can be
//! plugged in, including plain closures of type
//! `Fn(&Solution, &OrderTable) -> f64`.
//!
//! Two built-in objectives are provided:
//!
//! - [`PositionWeighted`]: `Σ risk · position` (1-indexed). Risky orders
//!   placed late in the sequence cost more.
//! - [`DelayAccumulation`]: walks the sequence with a running clock and
//!   charges each order its schedule slippage plus its risk.
//!
//! [`Objective`] selects between the two at run time.

use crate::error::{Result, SequencingError};
use crate::orders::OrderTable;
use crate::solution::Solution;

/// Scores a candidate sequence against the order table.
///
/// Implementations must be pure: the engines may call `evaluate` for many
/// solutions concurrently.
pub trait Evaluator: Send + Sync {
    /// Cost of `solution`. Lower is better.
    fn evaluate(&self, solution: &Solution, table: &OrderTable) -> f64;

    /// Checks that `table` carries the data this evaluator needs.
    ///
    /// Called once by the optimizer before a run. The default accepts any
    /// table.
    fn validate(&self, _table: &OrderTable) -> Result<()> {
        Ok(())
    }
}

impl<F> Evaluator for F
where
    F: Fn(&Solution, &OrderTable) -> f64 + Send + Sync,
{
    fn evaluate(&self, solution: &Solution, table: &OrderTable) -> f64 {
        self(solution, table)
    }
}

/// Position-weighted risk: the order at position `p` (1-indexed)
/// contributes `predicted_risk * p`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionWeighted;

impl Evaluator for PositionWeighted {
    fn evaluate(&self, solution: &Solution, table: &OrderTable) -> f64 {
        solution
            .iter()
            .enumerate()
            .map(|(p, pos)| table.get(pos).predicted_risk * (p + 1) as f64)
            .sum()
    }
}

/// Cumulative schedule slippage plus risk.
///
/// Each order takes `shipping_days` to dispatch. Walking the sequence with a
/// clock starting at zero, an order contributes
/// `max(0, elapsed + shipping_days - scheduled_days) + predicted_risk`,
/// after which the clock advances by `shipping_days`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayAccumulation {
    /// Fixed per-order dispatch cost in days.
    pub shipping_days: u32,
}

impl Default for DelayAccumulation {
    fn default() -> Self {
        Self { shipping_days: 1 }
    }
}

impl Evaluator for DelayAccumulation {
    fn evaluate(&self, solution: &Solution, table: &OrderTable) -> f64 {
        let step = self.shipping_days as f64;
        let mut elapsed = 0.0;
        let mut score = 0.0;
        for pos in solution.iter() {
            let order = table.get(pos);
            // both engines run validate() before scoring
            let scheduled = order.scheduled_days.unwrap_or(0) as f64;
            let delay = (elapsed + step - scheduled).max(0.0);
            score += delay + order.predicted_risk;
            elapsed += step;
        }
        score
    }

    fn validate(&self, table: &OrderTable) -> Result<()> {
        match table.orders().iter().find(|o| o.scheduled_days.is_none()) {
            Some(order) => Err(SequencingError::MissingScheduledDays(order.id)),
            None => Ok(()),
        }
    }
}

/// Run-time choice between the built-in objectives.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// See [`PositionWeighted`].
    #[default]
    PositionWeighted,
    /// See [`DelayAccumulation`].
    DelayAccumulation {
        /// Fixed per-order dispatch cost in days.
        shipping_days: u32,
    },
}

impl Evaluator for Objective {
    fn evaluate(&self, solution: &Solution, table: &OrderTable) -> f64 {
        match *self {
            Objective::PositionWeighted => PositionWeighted.evaluate(solution, table),
            Objective::DelayAccumulation { shipping_days } => {
                DelayAccumulation { shipping_days }.evaluate(solution, table)
            }
        }
    }

    fn validate(&self, table: &OrderTable) -> Result<()> {
        match *self {
            Objective::PositionWeighted => PositionWeighted.validate(table),
            Objective::DelayAccumulation { shipping_days } => {
                DelayAccumulation { shipping_days }.validate(table)
            }
        }
    }
}
