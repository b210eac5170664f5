//! A minimax agent for playing connect-four on a wide 6x12 board
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the positions at the search horizon with a static heuristic
//! that counts open windows of four cells.
//!
//! # Basic Usage
//!
//! ```
//! use connect12_ai::{board::{Board, Side}, engine::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the engine already has three in a row along the bottom
//! let mut board = Board::from_moves("5b6b7", Side::Engine)?;
//! let mut engine = Engine::new();
//!
//! let column = engine.decide(&mut board)?;
//! assert!(column == 4 || column == 8);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod board;

pub mod moves;

pub mod evaluation;

pub mod engine;


pub use board::{Board, Cell, GameState, LastMove, Side};
pub use engine::Engine;
pub use error::{GameError, Result};

/// The width of the game board in tiles
pub const WIDTH: usize = 12;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const ALIGNMENT: usize = 4;

// a win must fit on the board along every axis, and move strings use one base-36 digit per column
const_assert!(ALIGNMENT <= HEIGHT);
const_assert!(ALIGNMENT <= WIDTH);
const_assert!(WIDTH <= 36);

/// Creates an empty board
pub fn new_board() -> Board {
    Board::new()
}

/// Drops a tile for `side` into `column`, returning the row it landed in
pub fn apply_move(board: &mut Board, column: usize, side: Side) -> Result<usize> {
    board.apply(column, side)
}

/// Chooses the engine side's move with the default search depth
pub fn decide(board: &mut Board) -> Result<usize> {
    Engine::new().decide(board)
}
