use crate::game::{Board, Player};

/// Universal interface for anything that picks moves: the built-in
/// opponents, or a stronger engine dropped in later.
pub trait Agent {
    /// Select a 1-based column for `player` to play on `board`.
    ///
    /// Returns `None` only when no column can take a piece. Implementations
    /// must leave `board` as they found it.
    fn select_column(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
