//! # Connect Four
//!
//! A Connect Four engine on a configurable board, with a rule-of-thumb
//! computer opponent and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, placement and undo, win detection, round state machine
//! - [`ai`]: Agent trait, heuristic and random opponents
//! - [`session`]: Playing rounds between agents, score keeping
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
