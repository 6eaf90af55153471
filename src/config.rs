//! Experiment configuration.

use crate::error::{PercolationError, Result};

/// Parameters of a Monte Carlo threshold experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Side length of each grid.
    pub grid_size: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Seed for the trial generator. `None` draws one from OS entropy, so
    /// repeated runs differ.
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: None,
        }
    }

    /// Fixes the seed, making the experiment reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that both the grid size and the trial count are positive.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "n",
                value: self.grid_size,
            });
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "trials",
                value: self.trials,
            });
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new(200, 100)
    }
}
