//! Engine façade behavior.

use basalt::board::STARTPOS_FEN;
use basalt::engine::Engine;
use basalt::search::Limits;

#[test]
fn test_new_game_resets_to_startpos() {
    let mut engine = Engine::new();
    engine
        .set_position("4k3/8/8/8/8/8/8/4K3 w - - 0 1", &[])
        .unwrap();
    engine.new_game();
    assert_eq!(engine.board().to_fen(), STARTPOS_FEN);
}

#[test]
fn test_set_position_applies_moves() {
    let mut engine = Engine::new();
    engine
        .set_position(STARTPOS_FEN, &["e2e4", "e7e5", "g1f3"])
        .unwrap();
    assert_eq!(
        engine.board().to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_invalid_fen_keeps_previous_position() {
    let mut engine = Engine::new();
    engine
        .set_position(STARTPOS_FEN, &["e2e4"])
        .unwrap();
    let before = engine.board().to_fen();

    assert!(engine.set_position("not a fen", &[]).is_err());
    assert_eq!(engine.board().to_fen(), before);
}

#[test]
fn test_garbage_move_tokens_are_skipped() {
    let mut engine = Engine::new();
    // "e2e5" is well-formed but illegal; "zzzz" does not parse. Both
    // are skipped, the legal moves around them still apply.
    engine
        .set_position(STARTPOS_FEN, &["e2e4", "zzzz", "e2e5", "e7e5"])
        .unwrap();
    assert_eq!(
        engine.board().to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
}

#[test]
fn test_default_limits() {
    let limits = Limits::default();
    assert_eq!(limits.depth, 6);
    assert_eq!(limits.movetime_ms, 0);
}

#[test]
fn test_search_reuses_state_across_calls() {
    let mut engine = Engine::new();
    engine.set_position(STARTPOS_FEN, &[]).unwrap();
    let first = engine.search(&Limits {
        depth: 4,
        movetime_ms: 0,
    });
    // A second search of the same position hits the warm table; it
    // must still produce a legal result at full depth.
    let second = engine.search(&Limits {
        depth: 4,
        movetime_ms: 0,
    });
    assert!(first.best_move.is_some());
    assert!(second.best_move.is_some());
    assert_eq!(second.depth, 4);
}

#[test]
fn test_ready_is_immediate() {
    let engine = Engine::new();
    assert!(engine.ready());
}
