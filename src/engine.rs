//! An agent to choose moves with a depth-limited game tree search

use log::{debug, trace};

use crate::{
    board::{Board, LastMove, Side},
    error::{GameError, Result},
    evaluation::evaluate,
};

/// The search horizon in plies used by [`Engine::new`]
pub const DEFAULT_DEPTH: usize = 5;

/// The score of a position won by the engine side
pub const WIN_SCORE: i32 = 1_000_000;

/// Bound used for the initial search window, larger than any reachable score
pub const INFINITY: i32 = 1_000_000_000;

/// An agent to choose the engine side's move
///
/// # Notes
/// This agent runs a classical minimax search with alpha-beta pruning to a fixed
/// depth. The engine side maximises and the opponent minimises. Positions won by
/// either side score `WIN_SCORE` or `-WIN_SCORE`, and positions at the horizon are
/// scored with the static [`evaluate`] heuristic.
///
/// The board is never copied while searching: every move is applied to the
/// caller's board and reverted before the next sibling is tried, so the board is
/// unchanged once [`Engine::decide`] returns.
#[derive(Clone, Debug)]
pub struct Engine {
    depth: usize,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates a new `Engine` searching `DEFAULT_DEPTH` plies
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            node_count: 0,
        }
    }

    /// Sets the search depth of an existing `Engine`, a depth of zero searches one ply
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Performs game tree search
    ///
    /// Returns the minimax value of the position for the engine side, where
    /// `maximizing` tells whether the engine side is to move and `last_move`
    /// is the move that led to this position.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        last_move: Option<LastMove>,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || board.is_terminal(last_move) {
            if let Some(last) = last_move {
                if board.has_win_at(last.row, last.column, last.side) {
                    return match last.side {
                        Side::Engine => WIN_SCORE,
                        Side::Opponent => -WIN_SCORE,
                    };
                }
            }
            return evaluate(board);
        }

        let side = if maximizing {
            Side::Engine
        } else {
            Side::Opponent
        };

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for column in board.legal_columns() {
            let row = board
                .apply(column, side)
                .expect("legal column has no empty cell");
            let score = self.search(
                board,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                Some(LastMove::new(row, column, side)),
            );
            board.revert(row, column);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            // the other side already has a better option elsewhere, so
            // this branch will never be reached
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Chooses the best column for the engine side
    ///
    /// A move that wins immediately is played without searching. Otherwise each
    /// legal column is searched in centre-first order and the first one with the
    /// highest score is returned.
    pub fn decide(&mut self, board: &mut Board) -> Result<usize> {
        let moves = board.legal_columns();
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        for column in moves {
            let row = board.apply(column, Side::Engine)?;
            let wins = board.has_win_at(row, column, Side::Engine);
            board.revert(row, column);
            if wins {
                debug!("column {} wins immediately", column);
                return Ok(column);
            }
        }

        let start_nodes = self.node_count;
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for column in moves {
            let row = board.apply(column, Side::Engine)?;
            let score = self.search(
                board,
                self.depth - 1,
                alpha,
                beta,
                false,
                Some(LastMove::new(row, column, Side::Engine)),
            );
            board.revert(row, column);
            trace!("column {} scored {}", column, score);

            if score > best_score {
                best_score = score;
                best_move = Some(column);
            }
            alpha = alpha.max(best_score);
        }

        let best_move = best_move.ok_or(GameError::NoLegalMoves)?;
        debug!(
            "chose column {} with score {} after {} nodes",
            best_move,
            best_score,
            self.node_count - start_nodes
        );
        Ok(best_move)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
