//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses a short-term memory
//! of recently visited sequences to forbid immediate revisits, letting the
//! search walk through worse sequences to escape local optima.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: Iteration budget, memory capacity, neighborhood size
//! - [`TabuEngine`]: Current/best trajectory state, one iteration per step
//! - [`TabuMemory`]: Bounded FIFO with hashed membership
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod engine;
mod memory;

pub use config::TabuConfig;
pub use engine::TabuEngine;
pub use memory::TabuMemory;
