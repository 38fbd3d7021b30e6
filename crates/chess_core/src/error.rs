//! Errors raised by the rules adapter.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN string could not be parsed into a position.
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// The text is not a move in UCI long-algebraic notation.
    #[error("invalid move notation `{0}`")]
    InvalidMove(String),

    /// The move is well formed but not legal in the current position.
    #[error("illegal move `{mv}` in position {fen}")]
    IllegalMove { mv: String, fen: String },
}
