//! UCI long-algebraic move notation.
//!
//! `cozy_chess` encodes castling as the king capturing its own rook
//! (`e1h1`); UCI for standard chess writes the king's destination (`e1g1`).
//! These helpers translate between the two.

use crate::error::ChessError;
use crate::position::Position;
use crate::types::*;

/// Parses `text` as a move in the given position and checks that it is legal.
pub fn parse_uci_move(pos: &Position, text: &str) -> Result<Move, ChessError> {
    let text = text.trim();
    let mut mv: Move = text
        .parse()
        .map_err(|_| ChessError::InvalidMove(text.to_string()))?;

    let board = pos.board();
    let is_own_king = board.piece_on(mv.from) == Some(PieceKind::King)
        && board.color_on(mv.from) == Some(board.side_to_move());
    if is_own_king && mv.from.rank() == mv.to.rank() {
        let from_file = mv.from.file() as i8;
        let to_file = mv.to.file() as i8;
        if (to_file - from_file).abs() == 2 {
            let rook_file = if to_file > from_file { File::H } else { File::A };
            mv.to = Square::new(rook_file, mv.from.rank());
        }
    }

    if !pos.is_legal(mv) {
        return Err(ChessError::IllegalMove {
            mv: text.to_string(),
            fen: pos.fen(),
        });
    }
    Ok(mv)
}

/// Formats a legal move of `pos` in standard UCI notation.
pub fn format_uci_move(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    let is_castle = board.piece_on(mv.from) == Some(PieceKind::King)
        && board.color_on(mv.to) == board.color_on(mv.from);
    if is_castle {
        let king_file = if mv.to.file() as u8 > mv.from.file() as u8 {
            File::G
        } else {
            File::C
        };
        let to = Square::new(king_file, mv.from.rank());
        return Move { to, ..mv }.to_string();
    }
    mv.to_string()
}

/// Plays a sequence of UCI moves on `pos`, stopping at the first bad one.
pub fn apply_uci_moves<'a, I>(pos: &mut Position, moves: I) -> Result<(), ChessError>
where
    I: IntoIterator<Item = &'a str>,
{
    for text in moves {
        let mv = parse_uci_move(pos, text)?;
        pos.apply(mv);
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
