//! Core Connect Four game logic: configurable board with gravity placement,
//! undo and win detection, player types, and the round state machine.

mod board;
mod board_config;
mod player;
mod position;
mod state;

pub use board::{Board, Cell, Grid, MoveOutcome};
pub use board_config::{BoardConfig, COLS_RANGE, ROWS_RANGE, WIN_LENGTH_RANGE};
pub use player::Player;
pub use position::{Direction, Position};
pub use state::{Round, RoundState};
