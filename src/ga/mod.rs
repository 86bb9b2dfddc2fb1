//! Genetic Algorithm over dispatch sequences.
//!
//! A generational GA on permutation-encoded individuals. Each generation
//! runs tournament selection, order crossover (OX1), and per-position swap
//! mutation, then re-evaluates the whole offspring population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates, presets)
//! - [`GaEngine`]: Holds the population and advances one generation per step
//!
//! # Submodules
//!
//! - [`operators`]: OX1 crossover and swap mutation
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
pub mod operators;
pub mod selection;

pub use config::GaConfig;
pub use engine::GaEngine;
