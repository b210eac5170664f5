use crate::{
    error::{GameError, Result},
    moves::{move_order, MoveList},
    ALIGNMENT, HEIGHT, WIDTH,
};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    /// The side the search engine plays for
    Engine,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Engine => Side::Opponent,
            Side::Opponent => Side::Engine,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Engine,
    Opponent,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Engine => Cell::Engine,
            Side::Opponent => Cell::Opponent,
        }
    }
}

/// The most recently applied move, used to anchor win checks
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LastMove {
    pub row: usize,
    pub column: usize,
    pub side: Side,
}

impl LastMove {
    pub fn new(row: usize, column: usize, side: Side) -> Self {
        Self { row, column, side }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    EngineWin,
    OpponentWin,
    Draw,
}

/// The four alignment axes as (row, column) steps: horizontal, vertical and both diagonals
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A connect-four grid with gravity
///
/// Rows are counted from the bottom, so the tiles of a column always occupy
/// rows `0..n` for some `n`. A search shares one `Board` through `&mut` and
/// undoes every [`Board::apply`] with a matching [`Board::revert`] in reverse order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Plays a sequence of moves, one base-36 digit per column (`0`-`9`, `a`, `b`),
    /// alternating sides starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Side) -> Result<Self> {
        Self::replay(moves, first).map(|(board, _)| board)
    }

    /// Like [`Board::from_moves`], also returning the last move played
    pub fn replay<S: AsRef<str>>(moves: S, first: Side) -> Result<(Self, Option<LastMove>)> {
        let mut board = Self::new();
        let mut side = first;
        let mut last_move = None;

        for column_char in moves.as_ref().chars() {
            let column = match column_char.to_digit(WIDTH as u32) {
                Some(column) => column as usize,
                None => {
                    return Err(GameError::ParseMove {
                        character: column_char,
                    })
                }
            };
            // abort if the position is already decided
            if last_move.is_some() && board.is_terminal(last_move) {
                return Err(GameError::GameOver);
            }
            let row = board.apply(column, side)?;
            last_move = Some(LastMove::new(row, column, side));
            side = side.opponent();
        }
        Ok((board, last_move))
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Number of tiles on the board
    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Returns the playable columns, centre columns first
    pub fn legal_columns(&self) -> MoveList {
        let mut moves = MoveList::new();
        for &column in move_order().iter() {
            if self.playable(column) {
                moves.push(column);
            }
        }
        moves
    }

    /// Drops a tile for `side` into the lowest empty cell of `column`,
    /// returning the row it landed in
    pub fn apply(&mut self, column: usize, side: Side) -> Result<usize> {
        if column >= WIDTH {
            return Err(GameError::ColumnOutOfRange {
                column,
                width: WIDTH,
            });
        }
        let row = (0..HEIGHT)
            .find(|&row| self.get(row, column).is_empty())
            .ok_or(GameError::IllegalMove { column })?;

        self.cells[column + WIDTH * row] = side.into();
        Ok(row)
    }

    /// Clears a cell set by [`Board::apply`]. Moves must be reverted last-applied first.
    pub fn revert(&mut self, row: usize, column: usize) {
        debug_assert!(
            !self.get(row, column).is_empty(),
            "reverting empty cell ({}, {})",
            row,
            column
        );
        debug_assert!(
            row + 1 == HEIGHT || self.get(row + 1, column).is_empty(),
            "reverting ({}, {}) below another tile",
            row,
            column
        );
        self.cells[column + WIDTH * row] = Cell::Empty;
    }

    /// Checks whether the tile at (`row`, `column`) completes an alignment for `side`.
    ///
    /// Only runs through the given cell are counted, so this must be called
    /// with the coordinates of the move that was just applied.
    pub fn has_win_at(&self, row: usize, column: usize, side: Side) -> bool {
        let player = Cell::from(side);

        for &(dy, dx) in AXES.iter() {
            let mut run = 1;
            for &sign in [-1isize, 1].iter() {
                let mut y = row as isize + sign * dy;
                let mut x = column as isize + sign * dx;
                while y >= 0
                    && y < HEIGHT as isize
                    && x >= 0
                    && x < WIDTH as isize
                    && self.get(y as usize, x as usize) == player
                {
                    run += 1;
                    y += sign * dy;
                    x += sign * dx;
                }
            }
            if run >= ALIGNMENT {
                return true;
            }
        }

        false
    }

    /// A position is over once the last move won or no column is playable
    pub fn is_terminal(&self, last_move: Option<LastMove>) -> bool {
        if let Some(last) = last_move {
            if self.has_win_at(last.row, last.column, last.side) {
                return true;
            }
        }
        self.legal_columns().is_empty()
    }

    pub fn state(&self, last_move: Option<LastMove>) -> GameState {
        match last_move {
            Some(last) if self.has_win_at(last.row, last.column, last.side) => match last.side {
                Side::Engine => GameState::EngineWin,
                Side::Opponent => GameState::OpponentWin,
            },
            _ if self.is_full() => GameState::Draw,
            _ => GameState::Playing,
        }
    }

    /// Returns a copy of the board reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                mirrored.cells[(WIDTH - 1 - column) + WIDTH * row] = self.get(row, column);
            }
        }
        mirrored
    }

    /// Returns a copy of the board with the two sides exchanged
    pub fn swapped(&self) -> Self {
        let mut swapped = self.clone();
        for cell in swapped.cells.iter_mut() {
            *cell = match *cell {
                Cell::Engine => Cell::Opponent,
                Cell::Opponent => Cell::Engine,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_lands_on_lowest_empty_row() -> Result<()> {
        let mut board = Board::new();
        assert_eq!(board.apply(3, Side::Engine)?, 0);
        assert_eq!(board.apply(3, Side::Opponent)?, 1);
        assert_eq!(board.get(0, 3), Cell::Engine);
        assert_eq!(board.get(1, 3), Cell::Opponent);
        assert_eq!(board.num_pieces(), 2);
        Ok(())
    }

    #[test]
    fn apply_rejects_full_column() -> Result<()> {
        let mut board = Board::from_moves("000000", Side::Engine)?;
        let before = board.clone();
        assert_eq!(
            board.apply(0, Side::Engine),
            Err(GameError::IllegalMove { column: 0 })
        );
        assert_eq!(board, before);
        assert!(matches!(
            board.apply(WIDTH, Side::Engine),
            Err(GameError::ColumnOutOfRange { column: WIDTH, .. })
        ));
        Ok(())
    }

    #[test]
    fn apply_then_revert_restores_board() -> Result<()> {
        let mut board = Board::from_moves("56a", Side::Opponent)?;
        let before = board.clone();
        let row = board.apply(6, Side::Engine)?;
        assert_ne!(board, before);
        board.revert(row, 6);
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn legal_columns_skip_full_columns() -> Result<()> {
        let board = Board::from_moves("555555", Side::Engine)?;
        let legal: Vec<usize> = board.legal_columns().collect();
        assert_eq!(legal, vec![6, 4, 7, 3, 8, 2, 9, 1, 10, 0, 11]);
        Ok(())
    }

    #[test]
    fn parse_move_strings() {
        assert!(Board::from_moves("0123456789ab", Side::Engine).is_ok());
        assert_eq!(
            Board::from_moves("5z", Side::Engine),
            Err(GameError::ParseMove { character: 'z' })
        );
        assert_eq!(
            Board::from_moves("0000000", Side::Engine),
            Err(GameError::IllegalMove { column: 0 })
        );
        // engine completes the bottom row, then the opponent tries to move
        assert_eq!(
            Board::from_moves("0a1a2a3a", Side::Engine),
            Err(GameError::GameOver)
        );
    }

    fn line(cells: &[(usize, usize)], side: Side) -> Board {
        let mut board = Board::new();
        for &(row, column) in cells {
            board.cells[column + WIDTH * row] = side.into();
        }
        board
    }

    #[test]
    fn wins_along_each_axis() {
        let lines: [[(usize, usize); 4]; 4] = [
            [(2, 3), (2, 4), (2, 5), (2, 6)],
            [(0, 7), (1, 7), (2, 7), (3, 7)],
            [(0, 0), (1, 1), (2, 2), (3, 3)],
            [(5, 8), (4, 9), (3, 10), (2, 11)],
        ];
        for cells in lines.iter() {
            let board = line(cells, Side::Opponent);
            // completing the line from an end or from the middle
            for &(row, column) in [cells[0], cells[2], cells[3]].iter() {
                assert!(board.has_win_at(row, column, Side::Opponent));
                assert!(!board.has_win_at(row, column, Side::Engine));
            }

            let short = line(&cells[..3], Side::Opponent);
            let (row, column) = cells[2];
            assert!(!short.has_win_at(row, column, Side::Opponent));
        }
    }

    #[test]
    fn terminal_positions() -> Result<()> {
        let mut board = Board::from_moves("0a1a2a", Side::Engine)?;
        let row = board.apply(3, Side::Engine)?;
        let last = LastMove::new(row, 3, Side::Engine);
        assert!(board.is_terminal(Some(last)));
        assert_eq!(board.state(Some(last)), GameState::EngineWin);
        board.revert(row, 3);

        let row = board.apply(4, Side::Engine)?;
        let last = LastMove::new(row, 4, Side::Engine);
        assert!(!board.is_terminal(Some(last)));
        assert_eq!(board.state(Some(last)), GameState::Playing);

        assert!(!Board::new().is_terminal(None));
        Ok(())
    }

    #[test]
    fn full_board_is_a_draw() {
        // columns alternate blocks of two rows, so no four ever line up
        let mut board = Board::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                board.cells[column + WIDTH * row] = if ((row / 2) + column) % 2 == 0 {
                    Cell::Engine
                } else {
                    Cell::Opponent
                };
            }
        }
        assert!(board.legal_columns().is_empty());
        assert!(board.is_terminal(None));
        assert_eq!(board.state(None), GameState::Draw);
    }

    #[test]
    fn swapped_exchanges_sides() -> Result<()> {
        let board = Board::from_moves("56", Side::Engine)?;
        let swapped = board.swapped();
        assert_eq!(swapped.get(0, 5), Cell::Opponent);
        assert_eq!(swapped.get(0, 6), Cell::Engine);
        assert_eq!(swapped.swapped(), board);
        Ok(())
    }

    #[test]
    fn mirrored_reflects_columns() -> Result<()> {
        let board = Board::from_moves("01a", Side::Engine)?;
        let mirrored = board.mirrored();
        assert_eq!(mirrored.get(0, 11), Cell::Engine);
        assert_eq!(mirrored.get(0, 10), Cell::Opponent);
        assert_eq!(mirrored.get(0, 1), Cell::Engine);
        assert_eq!(mirrored.mirrored(), board);
        Ok(())
    }
}
