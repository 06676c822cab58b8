//! Trainer configuration.

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

/// Training loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of training episodes
    pub episodes: usize,
    /// Maximum steps per episode
    pub max_steps_per_episode: usize,
    /// Discount factor applied to the bootstrapped value.
    /// A value of 1.0 makes the target exactly `reward + next_value`.
    pub gamma: f64,
    /// Log progress every N episodes (0 disables progress logging)
    pub log_frequency: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            max_steps_per_episode: 200,
            gamma: 1.0,
            log_frequency: 10,
        }
    }
}

impl TrainerConfig {
    /// Validate the configuration, rejecting values that would make a
    /// training target meaningless or an episode impossible.
    pub fn validate(&self) -> Result<(), TrainerError> {
        if !self.gamma.is_finite() || !(0.0..=1.0).contains(&self.gamma) {
            return Err(TrainerError::configuration(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        if self.max_steps_per_episode == 0 {
            return Err(TrainerError::configuration(
                "max_steps_per_episode must be at least 1",
            ));
        }
        Ok(())
    }
}
