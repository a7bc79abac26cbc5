//! Run configuration.
//!
//! Dimensions and step count come from the command line; the transition
//! probabilities are fixed constants in [`crate::transition`] and are not
//! part of the configuration.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Interior rows.
    pub rows: usize,
    /// Interior columns.
    pub columns: usize,
    /// Last step index; the run executes `time_steps + 1` steps.
    pub time_steps: u64,
    /// RNG seed; `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 100,
            time_steps: 100,
            seed: None,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new(rows: usize, columns: usize, time_steps: u64) -> Self {
        Self {
            rows,
            columns,
            time_steps,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(CoreError::invalid_config(
                "number of rows must be a positive nonzero integer",
            ));
        }
        if self.columns == 0 {
            return Err(CoreError::invalid_config(
                "number of columns must be a positive nonzero integer",
            ));
        }
        if self.time_steps == 0 {
            return Err(CoreError::invalid_config(
                "number of time steps must be a positive nonzero integer",
            ));
        }
        Ok(())
    }

    /// Steps a full run executes; the upper bound is inclusive.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.time_steps.saturating_add(1)
    }
}
