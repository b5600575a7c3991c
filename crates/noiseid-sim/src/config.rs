//! Simulation parameters.
//!
//! A [`SimulationConfig`] is built by the caller and handed to
//! [`NoiseGenerator::new`](crate::NoiseGenerator::new); nothing is shared
//! between simulations.

use std::path::Path;

use noiseid_core::b_to_mu;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Parameters of one family of simulated series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Phase points per generated series.
    pub samples: usize,
    /// Variance of the discrete white driving noise.
    pub noise_power: f64,
    /// Spectral exponent of the simulated class (2 = white PM ... -4 = random-run FM).
    pub b: i32,
    /// Sample rate in samples per second.
    pub rate: f64,
    /// Independent series per averaged statistic.
    pub trials: usize,
    /// RNG seed; the same config always produces the same series.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: 1 << 14,
            noise_power: 2e-20,
            b: 0,
            rate: 1.0,
            trials: 20,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.samples < 2 {
            return Err(SimError::Config(format!(
                "samples must be at least 2, got {}",
                self.samples
            )));
        }
        if !(self.noise_power.is_finite() && self.noise_power > 0.0) {
            return Err(SimError::Config(format!(
                "noise_power must be positive and finite, got {}",
                self.noise_power
            )));
        }
        if !(self.rate.is_finite() && self.rate > 0.0) {
            return Err(SimError::Config(format!(
                "rate must be positive and finite, got {}",
                self.rate
            )));
        }
        if self.trials == 0 {
            return Err(SimError::Config("trials must be at least 1".to_string()));
        }
        b_to_mu(self.b)?;
        Ok(())
    }

    /// Load and validate a JSON config. Missing fields take their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, SimError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }
}
