use super::*;
use crate::outcome::Outcome;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

#[test]
fn test_startpos_has_twenty_moves() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.fen(), START_FEN);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn test_piece_at() {
    let pos = Position::startpos();
    assert_eq!(
        pos.piece_at(Square::E1),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        pos.piece_at(Square::D8),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(pos.piece_at(Square::E4), None);
}

#[test]
fn test_apply_undo_restores_position() {
    let mut pos = Position::startpos();
    let fen = pos.fen();
    let hash = pos.hash();

    pos.apply(mv("e2e4"));
    assert_eq!(pos.ply(), 1);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_ne!(pos.hash(), hash);

    pos.undo(mv("e2e4"));
    assert_eq!(pos.ply(), 0);
    assert_eq!(pos.fen(), fen);
    assert_eq!(pos.hash(), hash);
}

#[test]
fn test_random_playout_unwinds_exactly() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pos = Position::startpos();
    let mut trail = Vec::new();

    for _ in 0..60 {
        let moves = pos.legal_moves();
        let Some(&m) = moves.choose(&mut rng) else {
            break;
        };
        trail.push((pos.fen(), pos.quiet_plies(), m));
        pos.apply(m);
    }

    while let Some((fen, quiet, m)) = trail.pop() {
        pos.undo(m);
        assert_eq!(pos.fen(), fen);
        assert_eq!(pos.quiet_plies(), quiet);
    }
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_quiet_plies_reset_on_pawn_move_and_capture() {
    let mut pos = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K1N1 w - - 10 20").unwrap();
    assert_eq!(pos.quiet_plies(), 10);

    pos.apply(mv("g1f3"));
    assert_eq!(pos.quiet_plies(), 11);

    pos.apply(mv("e8d7"));
    assert_eq!(pos.quiet_plies(), 12);

    pos.apply(mv("e4d5"));
    assert_eq!(pos.quiet_plies(), 0, "capture resets the clock");

    pos.undo(mv("e4d5"));
    assert_eq!(pos.quiet_plies(), 12);
}

#[test]
fn test_quiet_plies_count_past_one_hundred() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
    pos.apply(mv("a1a2"));
    pos.apply(mv("e8d8"));
    assert_eq!(pos.quiet_plies(), 101);
    assert_eq!(pos.outcome(), None);
}

#[test]
fn test_fen_clock_above_one_hundred_is_kept() {
    let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 120 90";
    let mut pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.quiet_plies(), 120);
    assert_eq!(pos.fen(), fen);

    pos.apply(mv("a1a2"));
    assert_eq!(pos.quiet_plies(), 121);
    pos.undo(mv("a1a2"));
    assert_eq!(pos.fen(), fen);
}

#[test]
fn test_bad_fen_clock_still_rejected() {
    assert!(Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - many 90").is_err());
}

#[test]
fn test_seventy_five_move_rule() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 80").unwrap();
    pos.quiet_plies = 149;
    assert!(!pos.is_seventy_five_move_draw());

    pos.quiet_plies = 150;
    assert!(pos.is_seventy_five_move_draw());
    assert_eq!(pos.outcome(), Some(Outcome::SeventyFiveMoves));
}

#[test]
fn test_checkmate_beats_seventy_five_move_rule() {
    // Back-rank mate delivered on the quiet move that would also hit the limit
    let mut pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 80").unwrap();
    pos.quiet_plies = 150;
    assert_eq!(
        pos.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_repetition_counting() {
    let mut pos = Position::startpos();
    assert_eq!(pos.repetitions(), 1);

    for m in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        pos.apply(mv(m));
    }
    assert_eq!(pos.repetitions(), 2);
}

#[test]
fn test_invalid_fen() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, ChessError::InvalidFen { .. }));
}

#[test]
fn test_try_apply_rejects_illegal_move() {
    let mut pos = Position::startpos();
    let err = pos.try_apply(mv("e2e5")).unwrap_err();
    assert!(matches!(err, ChessError::IllegalMove { .. }));
    assert_eq!(pos.ply(), 0);

    pos.try_apply(mv("e2e4")).unwrap();
    assert_eq!(pos.ply(), 1);
}

#[test]
fn test_game_tree_impl_matches_inherent_methods() {
    let mut pos = Position::startpos();
    let moves = <Position as GameTree>::legal_moves(&pos);
    assert_eq!(moves, pos.legal_moves());
    assert!(!GameTree::is_terminal(&pos));

    GameTree::apply(&mut pos, moves[0]);
    GameTree::undo(&mut pos, moves[0]);
    assert_eq!(pos.fen(), START_FEN);
}
