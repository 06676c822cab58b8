//! # Rust DDPG Trainer
//!
//! A DDPG-style actor-critic training loop with pluggable collaborators.
//!
//! The crate's core is [`DdpgTrainer`]: it binds an environment, an actor, a
//! critic, and frozen target networks into one fixed interaction-and-update
//! protocol per step, iterated over a configurable number of episodes. The
//! collaborators are consumed only through narrow trait contracts and injected
//! at construction, so any environment or function approximator can plug in.
//!
//! ## Modules
//!
//! - `trainer` - The training loop controller and its configuration
//! - `agent` - Actor/critic trait contracts and linear reference implementations
//! - `environment` - Environment trait contract and a 1-D control task
//! - `utils` - Application configuration and training metrics
//! - `error` - Error taxonomy

pub mod agent;
pub mod environment;
pub mod error;
pub mod trainer;
pub mod utils;

pub use agent::{Actor, Critic, LinearActor, LinearCritic, Policy, ValueFunction};
pub use environment::{Environment, LineWorld, StepResult};
pub use error::TrainerError;
pub use trainer::{DdpgTrainer, TrainerConfig};
pub use utils::{AppConfig, EpisodeStats, TrainingMetrics};
