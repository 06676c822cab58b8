//! Utility functions and helpers.

pub mod config;
pub mod metrics;

pub use config::{AgentConfig, AppConfig};
pub use metrics::{EpisodeStats, TrainingMetrics};
