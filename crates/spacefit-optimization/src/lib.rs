//! Evolutionary search for bounded knapsack-style area allocation.
//!
//! Items carry an area cost, a profit and a stock limit. The solver evolves
//! integer quantity vectors under a soft area budget and reports the best
//! vector found together with the best-ever fitness per generation.

pub mod algorithms;
pub mod common;
pub mod error;
pub mod operators;
pub mod problem;

/// Re-export common types
pub use common::*;
pub use error::{ConfigError, ConfigResult};
pub use problem::{Evaluation, KnapsackProblem, DEFAULT_PENALTY_COEFFICIENT};

/// Initialize the optimization engine
pub fn init() {
    tracing::info!("Spacefit Optimization Engine Initialized");
}
