//! Static position scoring used at the search horizon
//!
//! Scores are from the engine side's point of view: positive values favour
//! the engine, negative values favour the opponent. The opponent's open
//! threes are weighted slightly heavier than the engine's own, which makes
//! the engine prefer blocking over building when the two are close.

use crate::{
    board::{Board, Cell, AXES},
    ALIGNMENT, HEIGHT, WIDTH,
};

/// Bonus per tile in the centre column(s)
pub const CENTRE_BONUS: i32 = 6;

pub const FOUR_SCORE: i32 = 100_000;
pub const OPEN_THREE_SCORE: i32 = 200;
pub const OPEN_TWO_SCORE: i32 = 30;
pub const OPEN_ONE_SCORE: i32 = 5;
pub const OPPONENT_THREE_SCORE: i32 = -220;
pub const OPPONENT_TWO_SCORE: i32 = -35;

/// The centre column, or the two centre columns on an even-width board
pub const fn centre_columns() -> (usize, usize) {
    if WIDTH % 2 == 0 {
        (WIDTH / 2 - 1, WIDTH / 2)
    } else {
        (WIDTH / 2, WIDTH / 2)
    }
}

/// Scores one window of four cells by how many tiles each side has in it
pub fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    debug_assert_eq!(own + opponent + empty, ALIGNMENT);

    // a window containing both sides can never become an alignment
    if own > 0 && opponent > 0 {
        return 0;
    }
    match (own, opponent, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => OPEN_THREE_SCORE,
        (2, _, 2) => OPEN_TWO_SCORE,
        (1, _, 3) => OPEN_ONE_SCORE,
        (_, 3, 1) => OPPONENT_THREE_SCORE,
        (_, 2, 2) => OPPONENT_TWO_SCORE,
        _ => 0,
    }
}

/// Evaluates the board for the engine side
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    let (left, right) = centre_columns();
    let centre_width = if left == right { 1 } else { 2 };
    for row in 0..HEIGHT {
        for &column in [left, right].iter().take(centre_width) {
            score += match board.get(row, column) {
                Cell::Engine => CENTRE_BONUS,
                Cell::Opponent => -CENTRE_BONUS,
                Cell::Empty => 0,
            };
        }
    }

    for &(dy, dx) in AXES.iter() {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                if let Some((own, opponent, empty)) = window_counts(board, row, column, dy, dx) {
                    score += score_window(own, opponent, empty);
                }
            }
        }
    }

    score
}

// counts (engine, opponent, empty) tiles in the window starting at (row, column),
// or None if the window runs off the board
fn window_counts(
    board: &Board,
    row: usize,
    column: usize,
    dy: isize,
    dx: isize,
) -> Option<(usize, usize, usize)> {
    let span = ALIGNMENT as isize - 1;
    let end_row = row as isize + dy * span;
    let end_column = column as isize + dx * span;
    if end_row < 0 || end_row >= HEIGHT as isize || end_column < 0 || end_column >= WIDTH as isize {
        return None;
    }

    let mut counts = (0, 0, 0);
    for i in 0..ALIGNMENT as isize {
        let y = (row as isize + dy * i) as usize;
        let x = (column as isize + dx * i) as usize;
        match board.get(y, x) {
            Cell::Engine => counts.0 += 1,
            Cell::Opponent => counts.1 += 1,
            Cell::Empty => counts.2 += 1,
        }
    }
    Some(counts)
}
