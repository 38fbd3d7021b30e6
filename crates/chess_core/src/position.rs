use cozy_chess::{BitBoard, Board, CastleRights};

use crate::error::ChessError;
use crate::tree::GameTree;
use crate::types::*;

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Highest halfmove clock `cozy_chess` accepts or keeps.
const BOARD_CLOCK_LIMIT: u16 = 100;

/// Index of the halfmove clock among the FEN fields.
const CLOCK_FIELD: usize = 4;

/// State saved before each applied move so it can be restored exactly.
#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    quiet_plies: u16,
}

/// A chess position that supports in-place apply/undo.
///
/// Move generation and legality are delegated to `cozy_chess`. This type adds
/// the undo stack and the game-ending rules that need history: the
/// seventy-five-move rule and fivefold repetition.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    /// Half-moves since the last capture or pawn move. `cozy_chess` saturates
    /// its own clock at 100, which is too low for the seventy-five-move rule.
    quiet_plies: u16,
    history: Vec<Snapshot>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    /// Parses a FEN. Halfmove clocks above 100 are kept in `quiet_plies`
    /// while the board itself is built with the clock capped.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fen = fen.trim();
        let clock = fen
            .split_whitespace()
            .nth(CLOCK_FIELD)
            .and_then(|field| field.parse::<u16>().ok());

        let board = match clock {
            Some(clock) if clock > BOARD_CLOCK_LIMIT => {
                with_halfmove_clock(fen, BOARD_CLOCK_LIMIT).parse::<Board>()
            }
            _ => fen.parse::<Board>(),
        }
        .map_err(|e| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;

        let mut pos = Self::from_board(board);
        if let Some(clock) = clock {
            pos.quiet_plies = clock;
        }
        Ok(pos)
    }

    fn from_board(board: Board) -> Self {
        let quiet_plies = board.halfmove_clock() as u16;
        Self {
            board,
            quiet_plies,
            history: Vec::new(),
        }
    }

    /// The underlying `cozy_chess` board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        let fen = self.board.to_string();
        if self.quiet_plies > BOARD_CLOCK_LIMIT {
            with_halfmove_clock(&fen, self.quiet_plies)
        } else {
            fen
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Hash of board, side to move, castling rights and en passant square.
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    /// Number of moves applied since this position was constructed.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn quiet_plies(&self) -> u16 {
        self.quiet_plies
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece::new(color, kind))
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board
            .generate_moves(|piece_moves| piece_moves.into_iter().next().is_some())
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv)
    }

    /// Plays a move that is already known to be legal.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.board.is_legal(mv), "apply called with illegal move {mv}");

        let us = self.board.side_to_move();
        let is_pawn_move = self.board.piece_on(mv.from) == Some(PieceKind::Pawn);
        let is_capture = self.board.color_on(mv.to) == Some(!us);

        self.history.push(Snapshot {
            board: self.board.clone(),
            quiet_plies: self.quiet_plies,
        });
        self.board.play_unchecked(mv);
        self.quiet_plies = if is_pawn_move || is_capture {
            0
        } else {
            self.quiet_plies.saturating_add(1)
        };
    }

    /// Plays a move from outside the legal-move list, checking it first.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), ChessError> {
        if !self.board.is_legal(mv) {
            return Err(ChessError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Reverts the most recent `apply(mv)`.
    pub fn undo(&mut self, mv: Move) {
        debug_assert!(!self.history.is_empty(), "undo of {mv} with empty history");
        if let Some(prev) = self.history.pop() {
            self.board = prev.board;
            self.quiet_plies = prev.quiet_plies;
        }
    }

    /// How many times the current position has occurred, counting itself.
    ///
    /// Positions match on placement, side to move, castling rights and the
    /// en passant file, the latter only when an en passant capture is legal.
    pub fn repetitions(&self) -> usize {
        let key = RepetitionKey::of(&self.board);
        1 + self
            .history
            .iter()
            .filter(|snap| snap.board.occupied() == self.board.occupied())
            .filter(|snap| RepetitionKey::of(&snap.board) == key)
            .count()
    }

    /// True if neither side has enough material left to deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        has_insufficient_material(&self.board, Color::White)
            && has_insufficient_material(&self.board, Color::Black)
    }

    pub fn is_seventy_five_move_draw(&self) -> bool {
        self.quiet_plies >= 150
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 5
    }
}

/// Identity of a position for repetition counting.
#[derive(Debug, PartialEq, Eq)]
struct RepetitionKey {
    pieces: [BitBoard; PieceKind::NUM],
    white: BitBoard,
    side_to_move: Color,
    castling: [CastleRights; Color::NUM],
    en_passant: Option<File>,
}

impl RepetitionKey {
    fn of(board: &Board) -> Self {
        Self {
            pieces: PieceKind::ALL.map(|kind| board.pieces(kind)),
            white: board.colors(Color::White),
            side_to_move: board.side_to_move(),
            castling: Color::ALL.map(|color| board.castle_rights(color).clone()),
            en_passant: board
                .en_passant()
                .filter(|&file| can_capture_en_passant(board, file)),
        }
    }
}

fn can_capture_en_passant(board: &Board, file: File) -> bool {
    let us = board.side_to_move();
    let target_rank = match us {
        Color::White => Rank::Sixth,
        Color::Black => Rank::Third,
    };
    let target = Square::new(file, target_rank);
    let pawns = board.colors(us) & board.pieces(PieceKind::Pawn);

    let mut found = false;
    board.generate_moves_for(pawns, |piece_moves| {
        found = piece_moves.into_iter().any(|mv| mv.to == target);
        found
    });
    found
}

fn with_halfmove_clock(fen: &str, clock: u16) -> String {
    fen.split_whitespace()
        .enumerate()
        .map(|(i, field)| {
            if i == CLOCK_FIELD {
                clock.to_string()
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_dark(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 0
}

fn has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.colors(color);
    let heavy = board.pieces(PieceKind::Pawn)
        | board.pieces(PieceKind::Rook)
        | board.pieces(PieceKind::Queen);
    if !(ours & heavy).is_empty() {
        return false;
    }

    // A lone knight can only mate with help from enemy blockers.
    if !(ours & board.pieces(PieceKind::Knight)).is_empty() {
        let blockers = board.colors(!color)
            & !board.pieces(PieceKind::King)
            & !board.pieces(PieceKind::Queen);
        return ours.len() <= 2 && blockers.is_empty();
    }

    let bishops = board.pieces(PieceKind::Bishop);
    if !(ours & bishops).is_empty() {
        let dark = bishops.into_iter().filter(|&sq| is_dark(sq)).count();
        let same_square_color = dark == 0 || dark == bishops.len() as usize;
        return same_square_color
            && board.pieces(PieceKind::Pawn).is_empty()
            && board.pieces(PieceKind::Knight).is_empty();
    }

    true
}

impl GameTree for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        Position::legal_moves(self)
    }

    fn apply(&mut self, mv: Move) {
        Position::apply(self, mv)
    }

    fn undo(&mut self, mv: Move) {
        Position::undo(self, mv)
    }

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
