//! DDPG training loop controller.
//!
//! One fixed interaction-and-update protocol per step: the live actor picks an
//! action for the current state, the environment advances, the frozen target
//! networks bootstrap the value of the next state, the critic is trained toward
//! the resulting temporal-difference target, and the actor is trained on the
//! critic's action gradient. Episodes end at a terminal transition or at the
//! configured step cap.

use crate::agent::{Actor, Critic, Policy, ValueFunction};
use crate::environment::Environment;
use crate::error::TrainerError;
use crate::trainer::TrainerConfig;
use crate::utils::{EpisodeStats, TrainingMetrics};

/// Result of one interaction step, threaded back into the episode loop
struct StepOutcome<S> {
    next_state: S,
    reward: f64,
    done: bool,
}

/// Training loop controller binding an environment, live actor/critic, and
/// frozen target networks
///
/// Collaborators are injected by reference and consumed only through their
/// trait contracts. The target networks are held behind shared references and
/// bare [`Policy`] / [`ValueFunction`] bounds: this component never trains
/// them, and their parameter updates are owned elsewhere.
pub struct DdpgTrainer<'a, E: Environment, A, C, TA, TC> {
    env: &'a mut E,
    actor: &'a mut A,
    critic: &'a mut C,
    target_actor: &'a TA,
    target_critic: &'a TC,
    config: TrainerConfig,
    /// Most recent observation: the last transition's next state, or the
    /// environment's reset output at an episode boundary
    state: E::State,
    metrics: TrainingMetrics,
}

impl<'a, E, A, C, TA, TC> DdpgTrainer<'a, E, A, C, TA, TC>
where
    E: Environment,
    E::State: Clone,
    A: Actor<E::State, E::Action>,
    C: Critic<E::State, E::Action, Gradient = A::Gradient>,
    TA: Policy<E::State, E::Action>,
    TC: ValueFunction<E::State, E::Action>,
{
    /// Create a trainer and reset the environment to obtain the initial state
    ///
    /// Fails fast with [`TrainerError::Configuration`] on an invalid
    /// configuration, before any collaborator is touched. A failing reset
    /// propagates as [`TrainerError::Collaborator`].
    pub fn new(
        env: &'a mut E,
        actor: &'a mut A,
        critic: &'a mut C,
        target_actor: &'a TA,
        target_critic: &'a TC,
        config: TrainerConfig,
    ) -> Result<Self, TrainerError> {
        config.validate()?;
        let state = env.reset()?;

        Ok(Self {
            env,
            actor,
            critic,
            target_actor,
            target_critic,
            config,
            state,
            metrics: TrainingMetrics::new(),
        })
    }

    /// Run the configured number of episodes
    ///
    /// Each episode starts from a fresh environment reset and executes up to
    /// `max_steps_per_episode` interaction steps, stopping early at a terminal
    /// transition. Any collaborator failure aborts the run immediately; a step
    /// mutates parameters and environment state, so nothing is retried.
    pub fn run(&mut self) -> Result<(), TrainerError> {
        for episode in 0..self.config.episodes {
            // Episodes must start from the initial state.
            self.state = self.env.reset()?;

            let mut total_reward = 0.0;
            let mut steps = 0;
            let mut terminated = false;

            for _ in 0..self.config.max_steps_per_episode {
                let outcome = self.interaction_step(self.state.clone())?;
                self.state = outcome.next_state;
                total_reward += outcome.reward;
                steps += 1;

                if outcome.done {
                    terminated = true;
                    break;
                }
            }

            self.metrics.record(EpisodeStats {
                episode,
                steps,
                total_reward,
                terminated,
            });

            log::debug!(
                "episode {} finished after {} steps (return {:.4}, terminal: {})",
                episode,
                steps,
                total_reward,
                terminated
            );

            if self.config.log_frequency != 0 && (episode + 1) % self.config.log_frequency == 0 {
                log::info!(
                    "Episode {}/{} | Return: {:.4} | Mean return: {:.4}",
                    episode + 1,
                    self.config.episodes,
                    total_reward,
                    self.metrics.mean_return()
                );
            }
        }

        Ok(())
    }

    /// Execute one interaction step from `state`
    ///
    /// The five collaborator updates form a strict dependency chain; the step
    /// either fully completes or the first failure aborts it mid-chain and the
    /// caller sees the collaborator's error verbatim.
    fn interaction_step(
        &mut self,
        state: E::State,
    ) -> Result<StepOutcome<E::State>, TrainerError> {
        let action = self.actor.predict(&state)?;
        let transition = self.env.step(&action)?;

        // Bootstrap from the frozen targets, never the live networks.
        let next_action = self.target_actor.predict(&transition.state)?;
        let next_value = self.target_critic.predict(&transition.state, &next_action)?;

        let target = if transition.done {
            transition.reward
        } else {
            transition.reward + self.config.gamma * next_value
        };

        self.critic.train(&state, &action, target)?;
        let gradient = self.critic.compute_gradient(&state, &action)?;
        self.actor.train(&state, &gradient)?;

        Ok(StepOutcome {
            next_state: transition.state,
            reward: transition.reward,
            done: transition.done,
        })
    }

    /// The most recent observation held by the trainer
    pub fn current_state(&self) -> &E::State {
        &self.state
    }

    /// Per-episode statistics accumulated so far
    pub fn metrics(&self) -> &TrainingMetrics {
        &self.metrics
    }

    /// The trainer's configuration
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}
