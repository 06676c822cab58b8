//! Application configuration.

use serde::{Deserialize, Serialize};

use crate::environment::LineWorldConfig;
use crate::trainer::TrainerConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Training loop configuration
    pub trainer: TrainerConfig,
    /// Environment configuration
    pub environment: LineWorldConfig,
    /// Agent configuration
    pub agent: AgentConfig,
}

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Actor learning rate
    pub actor_learning_rate: f64,
    /// Critic learning rate
    pub critic_learning_rate: f64,
    /// Action magnitude bound for the actor
    pub max_action: f64,
    /// Environment seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trainer: TrainerConfig::default(),
            environment: LineWorldConfig::default(),
            agent: AgentConfig {
                actor_learning_rate: 0.005,
                critic_learning_rate: 0.01,
                max_action: 1.0,
                seed: None,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(episodes) = std::env::var("DDPG_EPISODES") {
            if let Ok(episodes) = episodes.parse() {
                config.trainer.episodes = episodes;
            }
        }
        if let Ok(max_steps) = std::env::var("DDPG_MAX_STEPS") {
            if let Ok(max_steps) = max_steps.parse() {
                config.trainer.max_steps_per_episode = max_steps;
            }
        }
        if let Ok(gamma) = std::env::var("DDPG_GAMMA") {
            if let Ok(gamma) = gamma.parse() {
                config.trainer.gamma = gamma;
            }
        }
        if let Ok(seed) = std::env::var("DDPG_SEED") {
            if let Ok(seed) = seed.parse() {
                config.agent.seed = Some(seed);
            }
        }

        config
    }
}
