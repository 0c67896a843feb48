use std::result::Result as StdResult;

use insights_config::ConfigError;
use insights_core::CoreError;
use thiserror::Error;

/// Unified error type for ingestion, engine and storage failures.
#[derive(Error, Debug)]
pub enum InsightsError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, InsightsError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InsightsError),
    #[error("Invalid usage: {0}")]
    Usage(String),
}

impl From<std::io::Error> for InsightsError {
    fn from(err: std::io::Error) -> Self {
        InsightsError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for InsightsError {
    fn from(err: serde_json::Error) -> Self {
        InsightsError::StorageError(err.to_string())
    }
}

impl From<csv::Error> for InsightsError {
    fn from(err: csv::Error) -> Self {
        InsightsError::StorageError(err.to_string())
    }
}

impl From<ConfigError> for InsightsError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => InsightsError::StorageError(io.to_string()),
            ConfigError::Serde(message) => InsightsError::ConfigError(message),
            invalid @ ConfigError::Invalid { .. } => {
                InsightsError::ConfigError(invalid.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(InsightsError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(InsightsError::from(err))
    }
}
