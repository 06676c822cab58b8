//! Agent module: trait contracts and linear reference implementations.

mod linear;
mod traits;

pub use linear::{LinearActor, LinearCritic};
pub use traits::{Actor, Critic, Policy, ValueFunction};
