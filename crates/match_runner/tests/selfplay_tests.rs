//! End-to-end self-play through the public API

use chess_core::{apply_uci_moves, Position};
use classical_engine::ClassicalEngine;
use match_runner::{MatchConfig, MatchRunner};

#[test]
fn test_record_replays_to_final_position() {
    let config = MatchConfig {
        white_depth: 2,
        black_depth: 1,
        max_plies: 40,
        ..Default::default()
    };
    let mut white = ClassicalEngine::new();
    let mut black = ClassicalEngine::new();

    let record = MatchRunner::new(config)
        .play_game(&mut white, &mut black)
        .unwrap();

    let mut replay = Position::from_fen(&record.start_fen).unwrap();
    apply_uci_moves(&mut replay, record.moves.iter().map(String::as_str)).unwrap();
    assert_eq!(replay.fen(), record.final_fen);
    assert_eq!(replay.result().to_string(), record.result);
    assert!(record.white.contains("depth 2"));
    assert!(record.black.contains("depth 1"));
}

#[test]
fn test_self_play_is_deterministic() {
    let config = MatchConfig {
        white_depth: 2,
        black_depth: 2,
        max_plies: 12,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);

    let first = runner
        .play_game(&mut ClassicalEngine::new(), &mut ClassicalEngine::new())
        .unwrap();
    let second = runner
        .play_game(&mut ClassicalEngine::new(), &mut ClassicalEngine::new())
        .unwrap();

    assert_eq!(first, second);
}
