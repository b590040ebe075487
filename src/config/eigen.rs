//! Power iteration settings for the eigenvalue method

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::local::EigenvalueMethod;

/// Eigenvalue method configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EigenConfig {
    /// Convergence tolerance on successive eigenvector estimates
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget before reporting non-convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl EigenConfig {
    /// Build the configured eigenvalue method
    pub fn method(&self) -> EigenvalueMethod {
        EigenvalueMethod::new(self.tolerance, self.max_iterations)
    }

    /// Validate eigenvalue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ValidationError::InvalidTolerance);
        }
        if self.max_iterations == 0 {
            return Err(ValidationError::InvalidIterationBudget);
        }
        Ok(())
    }
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-12
}

fn default_max_iterations() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eigen_config_defaults() {
        let config = EigenConfig::default();
        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-9, f64::NAN] {
            let config = EigenConfig {
                tolerance,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance));
        }
    }

    #[test]
    fn test_validation_rejects_zero_iterations() {
        let config = EigenConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidIterationBudget)
        );
    }
}
