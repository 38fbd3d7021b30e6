use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Same position with every piece handed to the other side and the board flipped.
fn mirror(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    let board = fields.next().unwrap();
    let side = fields.next().unwrap();

    let ranks: Vec<String> = board
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    let side = if side == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", ranks.join("/"), side)
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1);
    assert_eq!(piece_value(PieceKind::Knight), 3);
    assert_eq!(piece_value(PieceKind::Bishop), 3);
    assert_eq!(piece_value(PieceKind::Rook), 5);
    assert_eq!(piece_value(PieceKind::Queen), 9);
    assert_eq!(piece_value(PieceKind::King), 100);
}

#[test]
fn test_start_position_is_balanced() {
    let p = Position::startpos();
    assert_eq!(evaluate(&p, Color::White), 0);
    assert_eq!(evaluate(&p, Color::Black), 0);
}

#[test]
fn test_missing_queen() {
    let p = pos("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&p, Color::White), 9);
    assert_eq!(evaluate(&p, Color::Black), -9);
}

#[test]
fn test_kings_cancel_out() {
    let p = pos("r5k1/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(evaluate(&p, Color::White), -5);
    assert_eq!(evaluate(&p, Color::Black), 5);
}

#[test]
fn test_antisymmetry() {
    let fens = [
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "8/5pk1/6p1/8/8/1R6/5PPP/6K1 b - - 0 40",
    ];
    for fen in fens {
        let p = pos(fen);
        let m = pos(&mirror(fen));
        for side in [Color::White, Color::Black] {
            assert_eq!(evaluate(&p, side), -evaluate(&p, !side), "{fen}");
            assert_eq!(evaluate(&m, side), -evaluate(&p, side), "{fen}");
        }
    }
}

#[test]
fn test_checkmate_scores_material_only() {
    // Fool's mate: white is mated but material is level
    let p = pos("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert_eq!(evaluate(&p, Color::White), 0);
}

#[test]
fn test_material_evaluator_uses_fixed_side() {
    let p = pos("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    let white = MaterialEvaluator::new(Color::White);
    assert_eq!(white.evaluate(&p), 9, "perspective does not follow side to move");
}
