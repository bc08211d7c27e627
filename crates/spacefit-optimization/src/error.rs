//! Configuration errors raised before any generation runs

use thiserror::Error;

/// Invalid solver or problem parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Population must hold at least one individual
    #[error("population size must be positive")]
    EmptyPopulation,

    /// At least one generation must run
    #[error("generation count must be positive")]
    NoGenerations,

    /// Probability outside [0, 1]
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Elite carry-over would fill the whole population
    #[error("elitism ({elitism}) must be smaller than the population size ({population_size})")]
    ElitismTooLarge { elitism: usize, population_size: usize },

    /// Tournament cannot sample k distinct individuals
    #[error("tournament size {k} must be within 1..={population_size}")]
    InvalidTournamentSize { k: usize, population_size: usize },

    /// Area budget must be a positive finite number
    #[error("area maximum must be positive and finite, got {0}")]
    InvalidAreaMaximum(f64),

    /// Item with a non-positive area or negative profit
    #[error("item {id} ({name}) is invalid: {reason}")]
    InvalidItem {
        id: u64,
        name: String,
        reason: &'static str,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
