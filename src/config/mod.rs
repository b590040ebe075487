//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and optional configuration files using the `config` and `dotenvy` crates.
//! Environment variables use the `AHP_ENGINE` prefix and nested values use
//! double underscores as separators. Every setting has a default.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::{init_tracing, EngineConfig};
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to initialize tracing");
//!
//! let local = config.local_algorithm();
//! println!("Local weights via {}", local.name());
//! ```

mod eigen;
mod error;
mod logging;
mod methods;
mod solver;

pub use eigen::EigenConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use methods::{FuzzyLocalMethod, GlobalMethod, LocalMethod, MethodsConfig};
pub use solver::SolverConfig;

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::lp::MinilpSolver;
use crate::domain::fuzzy_global::{FuzzyDistributedSynthesis, FuzzyGlobalWeightAlgorithm};
use crate::domain::fuzzy_local::FuzzyLocalWeightAlgorithm;
use crate::domain::global::GlobalWeightAlgorithm;
use crate::domain::local::LocalWeightAlgorithm;
use crate::ports::LinearProgramSolver;

const ENV_PREFIX: &str = "AHP_ENGINE";

/// Root engine configuration
///
/// Load using [`EngineConfig::load()`] (environment only) or
/// [`EngineConfig::load_from()`] (file, overridden by environment).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// LP solver configuration
    #[serde(default)]
    pub solver: SolverConfig,

    /// Power iteration settings
    #[serde(default)]
    pub eigen: EigenConfig,

    /// Default algorithm choices
    #[serde(default)]
    pub methods: MethodsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__SOLVER__TIMEOUT_MS=5000` -> `solver.timeout_ms = 5000`
    /// - `AHP_ENGINE__METHODS__LOCAL=row_geometric_mean` -> `methods.local = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking precedence
    ///
    /// The format is inferred from the file extension (TOML, JSON, YAML, ...).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.solver.validate()?;
        self.eigen.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// LP solver built from the solver section
    pub fn solver(&self) -> Arc<dyn LinearProgramSolver> {
        Arc::new(MinilpSolver::from_config(&self.solver))
    }

    /// Configured crisp local weight algorithm
    pub fn local_algorithm(&self) -> Box<dyn LocalWeightAlgorithm> {
        self.methods.local.build(&self.eigen)
    }

    /// Configured crisp global synthesis algorithm
    pub fn global_algorithm(&self) -> Box<dyn GlobalWeightAlgorithm> {
        self.methods.global.build()
    }

    /// Configured fuzzy local weight algorithm
    pub fn fuzzy_local_algorithm(&self) -> Box<dyn FuzzyLocalWeightAlgorithm> {
        self.methods.fuzzy_local.build(self.solver())
    }

    /// Interval global synthesis (the only variant)
    pub fn fuzzy_global_algorithm(&self) -> Box<dyn FuzzyGlobalWeightAlgorithm> {
        Box::new(FuzzyDistributedSynthesis::new(self.solver()))
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AHP_ENGINE__SOLVER__TIMEOUT_MS");
        env::remove_var("AHP_ENGINE__EIGEN__MAX_ITERATIONS");
        env::remove_var("AHP_ENGINE__METHODS__LOCAL");
        env::remove_var("AHP_ENGINE__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EngineConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.solver.timeout_ms, 10_000);
        assert_eq!(config.methods.local, LocalMethod::Eigenvalue);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__SOLVER__TIMEOUT_MS", "2500");
        env::set_var("AHP_ENGINE__METHODS__LOCAL", "row_geometric_mean");
        env::set_var("AHP_ENGINE__LOGGING__JSON", "true");
        let result = EngineConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.solver.timeout_ms, 2500);
        assert_eq!(config.methods.local, LocalMethod::RowGeometricMean);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file_with_env_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[solver]\ntimeout_ms = 750\n\n[eigen]\nmax_iterations = 50\n\n[methods]\nglobal = \"multiplicative\"\nfuzzy_local = \"goal_programming\""
        )
        .unwrap();
        env::set_var("AHP_ENGINE__EIGEN__MAX_ITERATIONS", "80");
        let result = EngineConfig::load_from(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.solver.timeout_ms, 750);
        assert_eq!(config.eigen.max_iterations, 80);
        assert_eq!(config.methods.global, GlobalMethod::Multiplicative);
        assert_eq!(config.methods.fuzzy_local, FuzzyLocalMethod::GoalProgramming);
        assert_eq!(config.global_algorithm().name(), "Multiplicative Synthesis");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = EngineConfig::load_from("/nonexistent/ahp-engine.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = EngineConfig {
            solver: SolverConfig { timeout_ms: 0 },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSolverTimeout)
        );
    }
}
