pub mod error;
pub mod outcome;
pub mod position;
pub mod tree;
pub mod types;
pub mod uci;

// Re-export the rules adapter (not engine-specific)
pub use error::ChessError;
pub use outcome::{GameResult, Outcome};
pub use position::{Position, START_FEN};
pub use tree::{Evaluator, GameTree};
pub use types::*;
pub use uci::{apply_uci_moves, format_uci_move, parse_uci_move};

// =============================================================================
// Engine trait, implemented by every move-choosing engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Material score of the best move from the engine's perspective
    pub score: Score,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the position to the given depth and pick a move for the side to move.
    ///
    /// The engine may play moves on `pos` while searching but must leave it
    /// exactly as it found it.
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for identification in logs and records
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "chess-minimax"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
