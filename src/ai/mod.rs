mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{HeuristicAgent, HeuristicConfig};
pub use random::RandomAgent;
