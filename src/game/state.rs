use super::{Board, BoardConfig, MoveOutcome, Player};
use crate::error::RoundError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won(Player),
    Draw,
}

impl RoundState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundState::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            RoundState::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Turn state machine for one round: whose move it is and whether the round
/// has finished. The board is owned exclusively by the round.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    board: Board,
    current_player: Player,
    state: RoundState,
}

impl Round {
    /// Create a round on an empty board with Red to move
    pub fn new(config: BoardConfig) -> Self {
        Round {
            board: Board::new(config),
            current_player: Player::FIRST,
            state: RoundState::InProgress,
        }
    }

    /// Get current player. Once the round is over this is the player who
    /// would have moved next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Check if round is over
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    /// Columns the current player may choose; empty once the round is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_moves()
    }

    /// Drop the current player's piece into a 1-based column.
    ///
    /// A rejected column (`InvalidColumn`, `ColumnFull`) leaves the turn with
    /// the same player. After a placement the round state is recomputed and,
    /// if play continues, the turn passes to the other player.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, RoundError> {
        if self.is_terminal() {
            return Err(RoundError::Finished(self.state));
        }

        let outcome = self.board.place(column, self.current_player);
        if outcome.is_placed() {
            self.state = self.board.check_round_state();
            if !self.state.is_terminal() {
                self.current_player = self.current_player.other();
            }
        }
        Ok(outcome)
    }

    /// Retract the last placement and hand the turn back to whoever made it.
    /// A finished round is reopened.
    pub fn take_back(&mut self) -> bool {
        let Some((_, player)) = self.board.last_move() else {
            return false;
        };
        self.board.undo_last();
        self.current_player = player;
        self.state = RoundState::InProgress;
        true
    }

    /// Start a fresh round on the same board dimensions
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = Player::FIRST;
        self.state = RoundState::InProgress;
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
