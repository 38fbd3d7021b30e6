//! Game-ending conditions.

use std::fmt;

use crate::position::Position;
use crate::types::Color;

/// Why a game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    InsufficientMaterial,
    Stalemate,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Final score of a game in PGN notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn result(self) -> GameResult {
        match self.winner() {
            Some(Color::White) => GameResult::WhiteWins,
            Some(Color::Black) => GameResult::BlackWins,
            None => GameResult::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner: Color::White } => write!(f, "checkmate, white wins"),
            Outcome::Checkmate { winner: Color::Black } => write!(f, "checkmate, black wins"),
            Outcome::InsufficientMaterial => write!(f, "draw by insufficient material"),
            Outcome::Stalemate => write!(f, "stalemate"),
            Outcome::SeventyFiveMoves => write!(f, "draw by seventy-five-move rule"),
            Outcome::FivefoldRepetition => write!(f, "draw by fivefold repetition"),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        };
        f.write_str(s)
    }
}

impl Position {
    /// The reason the game is over, or `None` while it is still going.
    ///
    /// Mate takes precedence over every draw rule.
    pub fn outcome(&self) -> Option<Outcome> {
        let has_moves = self.has_legal_moves();

        if !has_moves && self.in_check() {
            return Some(Outcome::Checkmate {
                winner: !self.side_to_move(),
            });
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if !has_moves {
            return Some(Outcome::Stalemate);
        }
        if self.is_seventy_five_move_draw() {
            return Some(Outcome::SeventyFiveMoves);
        }
        if self.is_fivefold_repetition() {
            return Some(Outcome::FivefoldRepetition);
        }
        None
    }

    pub fn result(&self) -> GameResult {
        self.outcome()
            .map(Outcome::result)
            .unwrap_or(GameResult::Ongoing)
    }
}
