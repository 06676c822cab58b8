//! Environment module implementing an OpenAI Gym-like interface.

mod line_world;

pub use line_world::{LineWorld, LineWorldConfig};

use anyhow::Result;

/// Step result returned by the environment
#[derive(Debug, Clone)]
pub struct StepResult<S> {
    /// Next state observation
    pub state: S,
    /// Reward for the action
    pub reward: f64,
    /// Whether the episode is done
    pub done: bool,
    /// Additional diagnostic info, ignored by the trainer
    pub info: Option<String>,
}

/// An environment the training loop can interact with
pub trait Environment {
    /// Observation type
    type State;
    /// Action type
    type Action;

    /// Begin a new episode and return the initial state
    ///
    /// Safe to call repeatedly; each call discards any in-progress episode.
    fn reset(&mut self) -> Result<Self::State>;

    /// Advance the environment by one transition
    fn step(&mut self, action: &Self::Action) -> Result<StepResult<Self::State>>;
}
