//! Solver configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_max_iterations() -> u32 {
    10
}
const fn default_tolerance() -> f64 {
    0.01
}

// ---------------------------------------------------------------------------
// SolveConfig
// ---------------------------------------------------------------------------

/// Iteration and convergence parameters shared by both solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Maximum solver passes (default: 10).
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// End-effector distance to target below which the solve is
    /// considered converged (default: 0.01).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl SolveConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed input, or a validation
    /// error for out-of-range values.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidMaxIterations);
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_iterations must be >= 1")]
    InvalidMaxIterations,

    #[error("tolerance must be >= 0, got {0}")]
    InvalidTolerance(f64),
}
