//! Experiment configuration.

use crate::error::{positive, PercolationError, Result};

/// Configuration for a threshold experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Grid side length N
    pub grid_size: usize,

    /// Number of independent trials T
    pub trials: usize,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: None,
        }
    }
}

impl StatsConfig {
    /// Build a config from signed command-line values.
    pub fn from_signed(grid_size: i64, trials: i64, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            grid_size: positive("grid size", grid_size)?,
            trials: positive("trials", trials)?,
            seed,
        })
    }

    /// Reject configs that bypassed `from_signed`.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(PercolationError::invalid("grid size", self.grid_size));
        }
        if self.trials == 0 {
            return Err(PercolationError::invalid("trials", self.trials));
        }
        Ok(())
    }
}
