//! Classical Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning over a material-only
//! evaluation. The search is generic over [`chess_core::GameTree`]; chess is
//! plugged in through [`chess_core::Position`] and [`MaterialEvaluator`].

mod eval;
mod search;

use chess_core::{Engine, Evaluator, Position, SearchResult};
use tracing::debug;

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, no move ordering
/// - Material evaluation from the point of view of the side to move at the root
/// - First-found move among equally scored moves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Statistics of the last search
    stats: SearchStats,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self {
            stats: SearchStats::default(),
        }
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();

        let evaluator = MaterialEvaluator::new(pos.side_to_move());
        let best = choose_move_scored(pos, &evaluator, depth, &mut self.stats);

        let score = match best {
            Some((_, score)) => score,
            None => evaluator.evaluate(pos),
        };
        debug!(
            engine = self.name(),
            depth,
            nodes = self.stats.nodes,
            score,
            found = best.is_some(),
            "search complete"
        );

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score,
            depth,
            nodes: self.stats.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }
}

// Re-export for direct use
pub use eval::{evaluate, piece_value, MaterialEvaluator};
pub use search::{choose_move, choose_move_scored, minimax, SearchStats, INFINITY};
