//! Line-world environment: a 1-D point mass that must reach the origin.
//!
//! The agent applies a bounded horizontal force to a damped point mass on a
//! line. Reward is the negative quadratic cost of position and force, so the
//! best policy parks the mass at the origin with minimal effort. The episode
//! terminates when the mass settles at the goal or leaves the track.

use anyhow::Result;
use ndarray::{array, Array1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::environment::{Environment, StepResult};

/// Line-world configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineWorldConfig {
    /// Reset position is sampled uniformly from [-start_range, start_range]
    pub start_range: f64,
    /// Leaving [-bounds, bounds] terminates the episode
    pub bounds: f64,
    /// Position and velocity magnitudes below this count as reaching the goal
    pub goal_tolerance: f64,
    /// Force magnitude is clamped to this value
    pub max_force: f64,
    /// Integration time step
    pub dt: f64,
    /// Velocity damping coefficient
    pub friction: f64,
}

impl Default for LineWorldConfig {
    fn default() -> Self {
        Self {
            start_range: 1.0,
            bounds: 3.0,
            goal_tolerance: 0.05,
            max_force: 1.0,
            dt: 0.1,
            friction: 0.5,
        }
    }
}

/// 1-D continuous control environment
pub struct LineWorld {
    config: LineWorldConfig,
    position: f64,
    velocity: f64,
    rng: StdRng,
}

impl LineWorld {
    /// Observation dimension: position and velocity
    pub const STATE_DIM: usize = 2;

    /// Create a line world with an entropy-seeded starting position generator
    pub fn new(config: LineWorldConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create a line world with a fixed seed, for reproducible runs
    pub fn with_seed(config: LineWorldConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: LineWorldConfig, rng: StdRng) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            rng,
        }
    }

    fn observation(&self) -> Array1<f64> {
        array![self.position, self.velocity]
    }

    fn at_goal(&self) -> bool {
        self.position.abs() < self.config.goal_tolerance
            && self.velocity.abs() < self.config.goal_tolerance
    }
}

impl Environment for LineWorld {
    type State = Array1<f64>;
    type Action = f64;

    fn reset(&mut self) -> Result<Array1<f64>> {
        self.position = self
            .rng
            .gen_range(-self.config.start_range..=self.config.start_range);
        self.velocity = 0.0;
        Ok(self.observation())
    }

    fn step(&mut self, action: &f64) -> Result<StepResult<Array1<f64>>> {
        let force = action.clamp(-self.config.max_force, self.config.max_force);

        self.velocity += (force - self.config.friction * self.velocity) * self.config.dt;
        self.position += self.velocity * self.config.dt;

        let reward = -(self.position.powi(2) + 0.1 * force.powi(2));

        let out_of_bounds = self.position.abs() > self.config.bounds;
        let done = out_of_bounds || self.at_goal();

        Ok(StepResult {
            state: self.observation(),
            reward,
            done,
            info: out_of_bounds.then(|| "out of bounds".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_starts_within_range_at_rest() {
        let config = LineWorldConfig::default();
        let mut env = LineWorld::with_seed(config.clone(), 42);

        for _ in 0..20 {
            let state = env.reset().unwrap();
            assert!(state[0].abs() <= config.start_range);
            assert_eq!(state[1], 0.0);
        }
    }

    #[test]
    fn test_force_accelerates_the_mass() {
        let mut env = LineWorld::with_seed(LineWorldConfig::default(), 1);
        env.reset().unwrap();

        let result = env.step(&1.0).unwrap();
        assert!(result.state[1] > 0.0);

        let result = env.step(&1.0).unwrap();
        assert!(result.state[1] > 0.0);
    }

    #[test]
    fn test_reward_is_quadratic_cost() {
        let mut env = LineWorld::with_seed(LineWorldConfig::default(), 1);
        env.reset().unwrap();

        let result = env.step(&0.5).unwrap();
        let expected = -(result.state[0].powi(2) + 0.1 * 0.5f64.powi(2));
        assert!((result.reward - expected).abs() < 1e-12);
        assert!(result.reward <= 0.0);
    }

    #[test]
    fn test_oversized_action_is_clamped() {
        let config = LineWorldConfig::default();
        let mut env = LineWorld::with_seed(config.clone(), 1);
        env.reset().unwrap();

        let clamped = env.step(&100.0).unwrap();
        let mut env = LineWorld::with_seed(config.clone(), 1);
        env.reset().unwrap();
        let max = env.step(&config.max_force).unwrap();

        assert_eq!(clamped.state[1], max.state[1]);
    }

    #[test]
    fn test_leaving_the_track_terminates() {
        let mut env = LineWorld::with_seed(LineWorldConfig::default(), 3);
        env.reset().unwrap();

        // Push in one direction until the episode ends; the mass must exit
        // the track within a bounded number of steps.
        let mut done = false;
        for _ in 0..10_000 {
            let result = env.step(&1.0).unwrap();
            if result.done {
                assert_eq!(result.info.as_deref(), Some("out of bounds"));
                done = true;
                break;
            }
        }
        assert!(done);
    }
}
