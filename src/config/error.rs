//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Solver timeout must be greater than zero")]
    InvalidSolverTimeout,

    #[error("Eigenvalue tolerance must be a positive finite number")]
    InvalidTolerance,

    #[error("Eigenvalue iteration budget must be greater than zero")]
    InvalidIterationBudget,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
