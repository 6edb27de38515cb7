//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no config file
//! at all) yields the stock engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::QuantumError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "QUANTUM_CHESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Standard deviation of the Gaussian noise added to each spectral
    /// component. Zero disables the noise entirely.
    #[serde(default = "default_noise_std_dev")]
    pub noise_std_dev: f64,
    /// Stabilizer added to the Euclidean norm before normalizing.
    #[serde(default = "default_norm_epsilon")]
    pub norm_epsilon: f64,
}

fn default_noise_std_dev() -> f64 {
    0.1
}

fn default_norm_epsilon() -> f64 {
    1e-10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            noise_std_dev: default_noise_std_dev(),
            norm_epsilon: default_norm_epsilon(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuantumError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, QuantumError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or fall back to
    /// defaults when the variable is unset.
    pub fn from_env() -> Result<Self, QuantumError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), QuantumError> {
        if !self.noise_std_dev.is_finite() || self.noise_std_dev < 0.0 {
            return Err(QuantumError::InvalidConfig(format!(
                "noise_std_dev must be finite and >= 0, got {}",
                self.noise_std_dev
            )));
        }
        if !self.norm_epsilon.is_finite() || self.norm_epsilon <= 0.0 {
            return Err(QuantumError::InvalidConfig(format!(
                "norm_epsilon must be finite and > 0, got {}",
                self.norm_epsilon
            )));
        }
        Ok(())
    }
}
