//! Material-based position evaluation

use chess_core::{Color, Evaluator, PieceKind, Position, Score, Square};

/// Evaluates the position from `searching`'s perspective.
///
/// Sums piece values over the board: own pieces count positive, enemy pieces
/// negative. Mate, stalemate and draws get no special score; a finished game
/// is worth whatever material is left on the board.
pub fn evaluate(pos: &Position, searching: Color) -> Score {
    let mut score: Score = 0;

    for sq in Square::ALL {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_value(pc.kind);
            score += if pc.color == searching { v } else { -v };
        }
    }

    score
}

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Material evaluator bound to the side the search is playing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialEvaluator {
    pub searching: Color,
}

impl MaterialEvaluator {
    pub fn new(searching: Color) -> Self {
        Self { searching }
    }
}

impl Evaluator<Position> for MaterialEvaluator {
    fn evaluate(&self, pos: &Position) -> Score {
        evaluate(pos, self.searching)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
