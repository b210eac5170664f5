/// Errors returned by board mutation and move selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move, column {column} is full")]
    IllegalMove { column: usize },

    #[error("invalid move, column {column} out of range. Columns must be below {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("could not parse '{character}' as a valid move")]
    ParseMove { character: char },

    #[error("invalid position, game is over")]
    GameOver,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
