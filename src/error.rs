//! Trainer errors.

use thiserror::Error;

/// Errors surfaced by the training loop controller
#[derive(Error, Debug)]
pub enum TrainerError {
    /// Invalid trainer configuration, rejected at construction
    #[error("invalid trainer configuration: {0}")]
    Configuration(String),

    /// Failure raised by a collaborator (environment, actor, critic),
    /// propagated verbatim
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl TrainerError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
