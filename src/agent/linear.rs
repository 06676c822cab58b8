//! Linear function approximators for continuous states and scalar actions.
//!
//! These are the crate's reference collaborators: a bounded linear policy and
//! a linear Q-function with a closed-form action gradient. Target copies are
//! made by cloning; the trainer never touches a target's parameters.

use anyhow::Result;
use ndarray::Array1;
use rand::Rng;

use crate::agent::{Actor, Critic, Policy, ValueFunction};

fn small_random_weights(dim: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_shape_fn(dim, |_| rng.gen_range(-0.1..0.1))
}

/// Deterministic linear policy with a bounded scalar action
#[derive(Debug, Clone)]
pub struct LinearActor {
    weights: Array1<f64>,
    learning_rate: f64,
    max_action: f64,
}

impl LinearActor {
    /// Create an actor with small random weights
    pub fn new(state_dim: usize, learning_rate: f64, max_action: f64) -> Self {
        Self::from_weights(small_random_weights(state_dim), learning_rate, max_action)
    }

    /// Create an actor with explicit weights
    pub fn from_weights(weights: Array1<f64>, learning_rate: f64, max_action: f64) -> Self {
        Self {
            weights,
            learning_rate,
            max_action,
        }
    }

    /// Current policy weights
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }
}

impl Policy<Array1<f64>, f64> for LinearActor {
    fn predict(&self, state: &Array1<f64>) -> Result<f64> {
        Ok(self
            .weights
            .dot(state)
            .clamp(-self.max_action, self.max_action))
    }
}

impl Actor<Array1<f64>, f64> for LinearActor {
    type Gradient = f64;

    fn train(&mut self, state: &Array1<f64>, gradient: &f64) -> Result<()> {
        // Deterministic policy gradient for a linear policy: ascend the
        // critic's action gradient along d(mu)/d(theta) = state.
        self.weights.scaled_add(self.learning_rate * gradient, state);
        Ok(())
    }
}

/// Linear state-action value function
#[derive(Debug, Clone)]
pub struct LinearCritic {
    state_weights: Array1<f64>,
    action_weight: f64,
    bias: f64,
    learning_rate: f64,
}

impl LinearCritic {
    /// Create a critic with small random weights
    pub fn new(state_dim: usize, learning_rate: f64) -> Self {
        let mut rng = rand::thread_rng();
        Self::from_parts(
            small_random_weights(state_dim),
            rng.gen_range(-0.1..0.1),
            0.0,
            learning_rate,
        )
    }

    /// Create a critic with explicit parameters
    pub fn from_parts(
        state_weights: Array1<f64>,
        action_weight: f64,
        bias: f64,
        learning_rate: f64,
    ) -> Self {
        Self {
            state_weights,
            action_weight,
            bias,
            learning_rate,
        }
    }
}

impl ValueFunction<Array1<f64>, f64> for LinearCritic {
    fn predict(&self, state: &Array1<f64>, action: &f64) -> Result<f64> {
        Ok(self.state_weights.dot(state) + self.action_weight * action + self.bias)
    }
}

impl Critic<Array1<f64>, f64> for LinearCritic {
    type Gradient = f64;

    fn train(&mut self, state: &Array1<f64>, action: &f64, target: f64) -> Result<()> {
        // One SGD step on the squared error toward the target.
        let error = target - self.predict(state, action)?;
        let step = self.learning_rate * error;

        self.state_weights.scaled_add(step, state);
        self.action_weight += step * action;
        self.bias += step;
        Ok(())
    }

    fn compute_gradient(&self, _state: &Array1<f64>, _action: &f64) -> Result<f64> {
        // dQ/da of a linear Q-function is the action weight.
        Ok(self.action_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_actor_predicts_weighted_sum() {
        let actor = LinearActor::from_weights(array![0.5, -0.25], 0.01, 10.0);
        let action = actor.predict(&array![2.0, 4.0]).unwrap();
        assert_eq!(action, 0.0);

        let action = actor.predict(&array![2.0, 0.0]).unwrap();
        assert_eq!(action, 1.0);
    }

    #[test]
    fn test_actor_clamps_to_action_bound() {
        let actor = LinearActor::from_weights(array![2.0], 0.01, 1.0);
        assert_eq!(actor.predict(&array![3.0]).unwrap(), 1.0);
        assert_eq!(actor.predict(&array![-3.0]).unwrap(), -1.0);
    }

    #[test]
    fn test_actor_training_follows_action_gradient() {
        let mut actor = LinearActor::from_weights(array![0.0, 0.0], 0.1, 10.0);
        let state = array![1.0, -2.0];

        actor.train(&state, &2.0).unwrap();
        assert_eq!(actor.weights(), &array![0.2, -0.4]);

        // A positive action gradient must raise the predicted action.
        assert!(actor.predict(&state).unwrap() > 0.0);
    }

    #[test]
    fn test_critic_training_reduces_error() {
        let mut critic = LinearCritic::from_parts(array![0.0, 0.0], 0.0, 0.0, 0.1);
        let state = array![1.0, 1.0];
        let action = 1.0;
        let target = 10.0;

        let before = (target - critic.predict(&state, &action).unwrap()).abs();
        critic.train(&state, &action, target).unwrap();
        let after = (target - critic.predict(&state, &action).unwrap()).abs();

        assert!(after < before);
    }

    #[test]
    fn test_action_gradient_is_action_weight() {
        let critic = LinearCritic::from_parts(array![1.0, 2.0], -0.75, 0.5, 0.1);
        let gradient = critic.compute_gradient(&array![9.0, 9.0], &3.0).unwrap();
        assert_eq!(gradient, -0.75);
    }
}
