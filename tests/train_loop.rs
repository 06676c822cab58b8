//! End-to-end training over the concrete environment and linear agents.

use rust_ddpg_trainer::environment::LineWorldConfig;
use rust_ddpg_trainer::{
    DdpgTrainer, LineWorld, LinearActor, LinearCritic, TrainerConfig, TrainerError,
};

#[test]
fn training_runs_to_completion_and_records_every_episode() {
    let mut env = LineWorld::with_seed(LineWorldConfig::default(), 7);
    let mut actor = LinearActor::new(LineWorld::STATE_DIM, 0.005, 1.0);
    let mut critic = LinearCritic::new(LineWorld::STATE_DIM, 0.01);
    let target_actor = actor.clone();
    let target_critic = critic.clone();

    let config = TrainerConfig {
        episodes: 20,
        max_steps_per_episode: 50,
        gamma: 0.9,
        log_frequency: 0,
    };

    let mut trainer = DdpgTrainer::new(
        &mut env,
        &mut actor,
        &mut critic,
        &target_actor,
        &target_critic,
        config,
    )
    .unwrap();
    trainer.run().unwrap();

    let metrics = trainer.metrics();
    assert_eq!(metrics.len(), 20);
    assert!(metrics
        .episodes()
        .iter()
        .all(|e| e.steps >= 1 && e.steps <= 50));
    assert!(metrics.mean_return().is_finite());
    assert!(metrics.best_return() >= metrics.mean_return());
    assert!(trainer.current_state().iter().all(|v| v.is_finite()));
}

#[test]
fn invalid_discount_factor_is_rejected() {
    let mut env = LineWorld::with_seed(LineWorldConfig::default(), 7);
    let mut actor = LinearActor::new(LineWorld::STATE_DIM, 0.005, 1.0);
    let mut critic = LinearCritic::new(LineWorld::STATE_DIM, 0.01);
    let target_actor = actor.clone();
    let target_critic = critic.clone();

    let config = TrainerConfig {
        gamma: -0.1,
        ..TrainerConfig::default()
    };

    let result = DdpgTrainer::new(
        &mut env,
        &mut actor,
        &mut critic,
        &target_actor,
        &target_critic,
        config,
    );
    assert!(matches!(result, Err(TrainerError::Configuration(_))));
}
