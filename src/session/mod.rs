//! Driving rounds between agents and keeping score across them.

pub mod metrics;
pub mod runner;

pub use metrics::{RoundResult, SessionMetrics};
pub use runner::play_round;
