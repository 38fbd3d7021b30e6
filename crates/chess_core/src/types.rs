pub use cozy_chess::{Color, File, Move, Piece as PieceKind, Rank, Square};

/// Search score, positive in favour of the searching side.
pub type Score = i32;

/// A piece standing on the board: its kind and the side owning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}
