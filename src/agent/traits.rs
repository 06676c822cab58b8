//! Actor and critic trait contracts.
//!
//! The training loop consumes its function approximators only through these
//! traits. Target networks are typed as bare [`Policy`] / [`ValueFunction`]
//! bounds, so the controller cannot train them even by accident.

use anyhow::Result;

/// A deterministic policy mapping state to action
///
/// `predict` must be a pure function of the current policy parameters.
pub trait Policy<S, A> {
    /// Select an action for the given state
    fn predict(&self, state: &S) -> Result<A>;
}

/// A trainable policy
pub trait Actor<S, A>: Policy<S, A> {
    /// Gradient of the value estimate with respect to the action,
    /// as produced by the paired critic
    type Gradient;

    /// Update policy parameters from the critic's action gradient at `state`
    fn train(&mut self, state: &S, gradient: &Self::Gradient) -> Result<()>;
}

/// A state-action value estimate
///
/// `predict` must be a pure function of the current value parameters.
pub trait ValueFunction<S, A> {
    /// Estimate the value of taking `action` in `state`
    fn predict(&self, state: &S, action: &A) -> Result<f64>;
}

/// A trainable state-action value estimate
pub trait Critic<S, A>: ValueFunction<S, A> {
    /// Gradient of the value estimate with respect to the action
    type Gradient;

    /// Update value parameters toward `target` for the given state-action pair
    fn train(&mut self, state: &S, action: &A, target: f64) -> Result<()>;

    /// Sensitivity of the predicted value to the action, at fixed state
    fn compute_gradient(&self, state: &S, action: &A) -> Result<Self::Gradient>;
}
