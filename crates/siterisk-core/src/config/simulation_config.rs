//! Monte Carlo settings.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SAMPLE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Trials per estimate. Default: 2000.
    pub sample_size: Option<u32>,
}

impl SimulationConfig {
    /// Returns the effective sample size, defaulting to 2000.
    pub fn effective_sample_size(&self) -> u32 {
        self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE)
    }
}
