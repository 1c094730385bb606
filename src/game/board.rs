use super::board_config::BoardConfig;
use super::player::Player;
use super::position::{Direction, Position};
use super::state::RoundState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Owned copy of the grid, indexed `[row][col]` with row 0 at the top.
pub type Grid = Vec<Vec<Cell>>;

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed(Position),
    ColumnFull,
    InvalidColumn,
}

impl MoveOutcome {
    pub fn is_placed(self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
    history: Vec<(Position, Player)>,
}

impl Board {
    /// Create a new empty board
    pub fn new(config: BoardConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::Empty; config.rows() * config.cols()],
            history: Vec::with_capacity(config.rows() * config.cols()),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Get the cell at a zero-based position. Row 0 is the top.
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows() && col < self.cols(),
            "({row}, {col}) is outside a {}x{} board",
            self.rows(),
            self.cols()
        );
        self.cells[self.index(row, col)]
    }

    fn at(&self, pos: Position) -> Cell {
        self.cells[self.index(pos.row, pos.col)]
    }

    /// Zero-based column index for a 1-based column number.
    fn column_index(&self, column: usize) -> Option<usize> {
        (1..=self.cols()).contains(&column).then(|| column - 1)
    }

    /// Check if a column (1-based) can take no more pieces. Out-of-range
    /// columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.column_index(column) {
            Some(col) => !self.at(Position::new(0, col)).is_empty(),
            None => true,
        }
    }

    /// Drop a piece into a 1-based column. The piece lands on the lowest
    /// empty cell; nothing changes unless the outcome is `Placed`.
    pub fn place(&mut self, column: usize, player: Player) -> MoveOutcome {
        let Some(col) = self.column_index(column) else {
            return MoveOutcome::InvalidColumn;
        };

        let Some(row) = (0..self.rows())
            .rev()
            .find(|&row| self.at(Position::new(row, col)).is_empty())
        else {
            return MoveOutcome::ColumnFull;
        };

        let position = Position::new(row, col);
        let idx = self.index(row, col);
        self.cells[idx] = player.to_cell();
        self.history.push((position, player));
        MoveOutcome::Placed(position)
    }

    /// Take back the most recent placement. Returns false if there was none.
    pub fn undo_last(&mut self) -> bool {
        match self.history.pop() {
            Some((position, _)) => {
                let idx = self.index(position.row, position.col);
                self.cells[idx] = Cell::Empty;
                true
            }
            None => false,
        }
    }

    /// The most recent placement, if any
    pub fn last_move(&self) -> Option<(Position, Player)> {
        self.history.last().copied()
    }

    /// All placements in the order they were made
    pub fn history(&self) -> &[(Position, Player)] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Clear every cell and the history, keeping the configuration.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.history.clear();
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (1..=self.cols()).all(|column| self.is_column_full(column))
    }

    /// Columns (1-based, ascending) that can still take a piece
    pub fn valid_moves(&self) -> Vec<usize> {
        (1..=self.cols())
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Number of pieces in a 1-based column; 0 for out-of-range columns.
    pub fn column_height(&self, column: usize) -> usize {
        match self.column_index(column) {
            Some(col) => (0..self.rows())
                .filter(|&row| !self.at(Position::new(row, col)).is_empty())
                .count(),
            None => 0,
        }
    }

    /// Independent copy of the grid.
    pub fn snapshot(&self) -> Grid {
        self.cells
            .chunks(self.cols())
            .map(|row| row.to_vec())
            .collect()
    }

    /// Length of the same-player run through `start` along `direction`,
    /// counting both ways and the start cell itself.
    fn run_length(&self, start: Position, direction: Direction) -> usize {
        let cell = self.at(start);
        if cell.is_empty() {
            return 0;
        }

        let mut count = 1;
        for multiplier in [1, -1] {
            let mut steps = multiplier;
            while let Some(pos) = start.offset(direction, steps, self.rows(), self.cols()) {
                if self.at(pos) != cell {
                    break;
                }
                count += 1;
                steps += multiplier;
            }
        }
        count
    }

    /// The player owning a winning line through `position`, if there is one.
    ///
    /// Checking only the last placed piece is enough during play, since any
    /// new line must pass through it.
    pub fn winner_through(&self, position: Position) -> Option<Player> {
        if !position.is_within(self.rows(), self.cols()) {
            return None;
        }
        let player = self.at(position).player()?;
        Direction::ALL
            .iter()
            .any(|&direction| self.run_length(position, direction) >= self.config.win_length())
            .then_some(player)
    }

    /// Scan every occupied cell for a winning line.
    pub fn find_winner(&self) -> Option<Player> {
        (0..self.rows())
            .flat_map(|row| (0..self.cols()).map(move |col| Position::new(row, col)))
            .find_map(|pos| self.winner_through(pos))
    }

    pub fn check_round_state(&self) -> RoundState {
        if let Some(player) = self.find_winner() {
            RoundState::Won(player)
        } else if self.is_full() {
            RoundState::Draw
        } else {
            RoundState::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
