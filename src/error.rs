//! Error taxonomy for sequencing runs.
//!
//! Only invalid inputs are errors. Empty or single-order tables and a tabu
//! search that runs out of admissible neighbors are normal outcomes and are
//! reported through [`Termination`](crate::optimizer::Termination).

use crate::orders::OrderId;
use thiserror::Error;

/// Errors surfaced before a run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencingError {
    /// Invalid hyperparameters. No partial search is attempted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two rows of the risk table share an identifier.
    #[error("duplicate order id {0}")]
    DuplicateOrderId(OrderId),

    /// A predicted risk is NaN or outside `[0, 1]`.
    #[error("order {id}: predicted risk {risk} is outside [0, 1]")]
    RiskOutOfRange {
        /// Offending order.
        id: OrderId,
        /// The rejected value.
        risk: f64,
    },

    /// The evaluator needs `scheduled_days` but the order has none.
    #[error("order {0} has no scheduled_days")]
    MissingScheduledDays(OrderId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequencingError>;
