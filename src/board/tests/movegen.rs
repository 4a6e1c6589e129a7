//! Move generation edge cases.

use crate::board::{Board, Color, Move, Square};

fn contains_move(board: &mut Board, text: &str) -> bool {
    board.generate_moves().iter().any(|m| m.to_string() == text)
}

#[test]
fn test_startpos_has_twenty_moves() {
    let mut board = Board::new();
    assert_eq!(board.generate_moves().len(), 20);
}

#[test]
fn test_both_castles_generated() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(contains_move(&mut board, "e1g1"));
    assert!(contains_move(&mut board, "e1c1"));

    let castles: Vec<Move> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_castle())
        .collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn test_castle_blocked_by_attack_on_transit_square() {
    // A black rook on f8 covers f1; kingside castling is illegal,
    // queenside is not.
    let mut board = Board::from_fen("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!contains_move(&mut board, "e1g1"));
    assert!(contains_move(&mut board, "e1c1"));
}

#[test]
fn test_castle_illegal_while_in_check() {
    let mut board = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!contains_move(&mut board, "e1g1"));
    assert!(!contains_move(&mut board, "e1c1"));
}

#[test]
fn test_castle_queenside_b_file_may_be_attacked() {
    // b1 attacked does not forbid O-O-O; the king never crosses b1.
    let mut board = Board::from_fen("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(contains_move(&mut board, "e1c1"));
}

#[test]
fn test_en_passant_capture_available() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert!(contains_move(&mut board, "e5d6"));

    let mv = board.parse_move("e5d6").unwrap();
    assert!(mv.is_en_passant());
    board.make_move(mv);
    assert_eq!(board.piece_at(Square::new(4, 3)), None, "d5 pawn captured");
}

#[test]
fn test_en_passant_pinned_pawn_cannot_capture() {
    // The classic horizontal pin: capturing en passant would expose the
    // white king on the fifth rank to the h5 rook.
    let mut board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 0 1");
    let mv = board.parse_move("c7c5").unwrap();
    board.make_move(mv);
    assert!(!contains_move(&mut board, "b5c6"));
}

#[test]
fn test_promotions_generate_all_four_pieces() {
    let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let promotions: Vec<Move> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_promotion())
        .collect();
    assert_eq!(promotions.len(), 4);
}

#[test]
fn test_pinned_piece_cannot_move_off_the_pin() {
    // The e-file knight is pinned against the king by a rook.
    let mut board = Board::from_fen("4r1k1/8/8/8/8/4N3/8/4K3 w - - 0 1");
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| m.from() != Square::new(2, 4)));
}

#[test]
fn test_check_evasions_only() {
    // Queen gives check; every legal move must resolve it.
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1");
    let us = Color::White;
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    for mv in &moves {
        let info = board.make_move(mv);
        assert!(!board.is_in_check(us));
        board.unmake_move(mv, info);
    }
}

#[test]
fn test_checkmate_and_stalemate_detection() {
    let mut mated = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 2");
    assert!(mated.is_checkmate());
    assert!(!mated.is_stalemate());

    let mut stalemated = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(stalemated.is_stalemate());
    assert!(!stalemated.is_checkmate());
}

#[test]
fn test_tactical_subset_matches_filter() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let tactical = board.generate_tactical_moves();
    let filtered: Vec<Move> = board
        .generate_moves()
        .iter()
        .filter(|m| m.is_tactical())
        .collect();
    assert_eq!(tactical.len(), filtered.len());
    for mv in &tactical {
        assert!(filtered.contains(&mv));
    }
}
