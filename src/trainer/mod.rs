//! Training loop controller module.

mod config;
mod ddpg;

pub use config::TrainerConfig;
pub use ddpg::DdpgTrainer;
