//! LP solver configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// LP solver configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SolverConfig {
    /// Per-solve timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl SolverConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate solver configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_ms == 0 {
            return Err(ValidationError::InvalidSolverTimeout);
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}
