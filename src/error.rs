//! Error types for planning runs

use spacefit_optimization::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading a run or planning an allocation
#[derive(Error, Debug)]
pub enum SpacefitError {
    /// Invalid solver parameters or catalog values
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No catalog item is selected for the run
    #[error("No catalog items selected; select at least one item")]
    EmptyCatalog,

    /// Config file extension is not YAML or JSON
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpacefitResult<T> = Result<T, SpacefitError>;
