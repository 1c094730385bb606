/// A zero-based `(row, col)` coordinate. Row 0 is the top of the board.
///
/// A position carries no board of its own; whether it is in range depends on
/// the dimensions it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The four line axes a win can run along. Each axis also covers its
/// opposite direction, so stepping with a multiplier of +1 and -1 reaches all
/// eight neighbours of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(delta_row, delta_col)` for one step along this axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// The position `steps` moves along `direction`, or `None` if that lands
    /// outside a `rows x cols` board.
    pub fn offset(
        self,
        direction: Direction,
        steps: isize,
        rows: usize,
        cols: usize,
    ) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr * steps)?;
        let col = self.col.checked_add_signed(dc * steps)?;
        let next = Position { row, col };
        next.is_within(rows, cols).then_some(next)
    }
}
