//! Terminal UI for playing Connect Four, two-player or against the
//! heuristic opponent.

mod app;
mod game_view;

pub use app::{App, GameMode};
