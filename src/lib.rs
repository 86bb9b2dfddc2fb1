//! Delivery-order sequencing by predicted delay risk.
//!
//! Given a table of orders, each carrying a machine-predicted delay-risk
//! score (and optionally a scheduled shipping window), finds a dispatch
//! order that minimizes aggregate exposure to delay.
//!
//! - **Genetic Algorithm (GA)**: Population-based search with tournament
//!   selection, order crossover (OX1), and swap mutation.
//! - **Tabu Search (TS)**: Single-trajectory search over random swap
//!   neighborhoods with a bounded memory of recent sequences.
//!
//! Both engines are driven step by step by the [`optimizer`] facade, which
//! owns the run's single seeded random generator, so a fixed seed
//! reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_sequencing::fitness::PositionWeighted;
//! use u_sequencing::optimizer::{optimize, Strategy};
//! use u_sequencing::orders::{Order, OrderTable};
//! use u_sequencing::tabu::TabuConfig;
//!
//! let table = OrderTable::new(vec![
//!     Order::new(1001, 0.9),
//!     Order::new(1002, 0.1),
//!     Order::new(1003, 0.5),
//! ])
//! .unwrap();
//!
//! let result = optimize(&table, &PositionWeighted, Strategy::Tabu(TabuConfig::default()), 7).unwrap();
//! assert_eq!(result.best_order.len(), 3);
//! ```
//!
//! # Architecture
//!
//! The risk table is produced upstream by a prediction pipeline; this crate
//! performs no I/O. Fitness functions are pluggable through
//! [`fitness::Evaluator`].

pub mod engine;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod optimizer;
pub mod orders;
pub mod random;
pub mod solution;
pub mod tabu;

pub use error::{Result, SequencingError};
