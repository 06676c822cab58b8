//! Train linear DDPG agents on the line-world environment.

use anyhow::Result;
use rust_ddpg_trainer::{
    AppConfig, DdpgTrainer, LineWorld, LinearActor, LinearCritic,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = if let Some(path) = args.get(1) {
        println!("Loading config from {}...", path);
        AppConfig::from_file(path)?
    } else {
        AppConfig::from_env()
    };

    let mut env = match config.agent.seed {
        Some(seed) => LineWorld::with_seed(config.environment.clone(), seed),
        None => LineWorld::new(config.environment.clone()),
    };

    let mut actor = LinearActor::new(
        LineWorld::STATE_DIM,
        config.agent.actor_learning_rate,
        config.agent.max_action,
    );
    let mut critic = LinearCritic::new(LineWorld::STATE_DIM, config.agent.critic_learning_rate);

    // Frozen snapshots of the initial networks serve as bootstrap targets.
    let target_actor = actor.clone();
    let target_critic = critic.clone();

    println!("Starting training...");
    println!("Episodes: {}", config.trainer.episodes);
    println!("Max steps per episode: {}", config.trainer.max_steps_per_episode);
    println!("Gamma: {}", config.trainer.gamma);
    println!();

    let mut trainer = DdpgTrainer::new(
        &mut env,
        &mut actor,
        &mut critic,
        &target_actor,
        &target_critic,
        config.trainer.clone(),
    )?;
    trainer.run()?;

    let metrics = trainer.metrics();
    println!("\n=== Training Summary ===");
    println!("Episodes: {}", metrics.len());
    println!("Mean return: {:.4}", metrics.mean_return());
    println!("Best return: {:.4}", metrics.best_return());
    println!("Mean episode length: {:.1} steps", metrics.mean_steps());
    println!(
        "Terminal episodes: {:.1}%",
        metrics.termination_rate() * 100.0
    );

    Ok(())
}
