//! FEN parsing and emission tests.

use crate::board::{Board, Color, FenError, Square, STARTPOS_FEN};

#[test]
fn test_startpos_roundtrip() {
    let board = Board::from_fen(STARTPOS_FEN);
    assert_eq!(board.to_fen(), STARTPOS_FEN);
}

#[test]
fn test_fields_parse() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR b KQkq d6 4 11");
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.en_passant_target(), Some(Square::new(5, 3)));
    assert_eq!(board.halfmove_clock(), 4);
    assert_eq!(board.fullmove_number(), 11);
}

#[test]
fn test_omitted_clocks_default() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - -");
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
}

#[test]
fn test_too_few_fields_rejected() {
    assert_eq!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w -"),
        Err(FenError::TooFewFields { found: 3 })
    );
}

#[test]
fn test_wrong_rank_count_rejected() {
    assert!(matches!(
        Board::try_from_fen("8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(FenError::BadRankCount { found: 7 })
    ));
}

#[test]
fn test_rank_not_covering_eight_files_rejected() {
    // Seven files in rank 1.
    assert!(matches!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
        Err(FenError::BadFileCount { .. })
    ));
    // Nine files in rank 8.
    assert!(matches!(
        Board::try_from_fen("4k4/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(FenError::BadFileCount { .. })
    ));
}

#[test]
fn test_invalid_piece_rejected() {
    assert_eq!(
        Board::try_from_fen("4x3/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(FenError::InvalidPiece { ch: 'x' })
    );
}

#[test]
fn test_invalid_side_rejected() {
    assert!(matches!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
        Err(FenError::InvalidSideToMove { .. })
    ));
}

#[test]
fn test_invalid_castling_rejected() {
    assert_eq!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w A - 0 1"),
        Err(FenError::InvalidCastling { ch: 'A' })
    );
}

#[test]
fn test_invalid_en_passant_rejected() {
    assert!(matches!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e9 0 1"),
        Err(FenError::InvalidEnPassant { .. })
    ));
}

#[test]
fn test_missing_king_rejected() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(FenError::BadKingCount)
    );
    assert_eq!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::BadKingCount)
    );
    // Two white kings.
    assert_eq!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/2K1K3 w - - 0 1"),
        Err(FenError::BadKingCount)
    );
}

#[test]
fn test_invalid_clock_rejected() {
    assert!(matches!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
        Err(FenError::InvalidClock { .. })
    ));
}

/// Every position reachable within three plies of the start must
/// survive an emit/parse round trip bit-identically.
#[test]
fn test_roundtrip_over_perft_3_tree() {
    fn walk(board: &mut Board, depth: u32, visited: &mut u32) {
        let fen = board.to_fen();
        let reparsed = Board::try_from_fen(&fen).expect("emitted FEN must parse");
        assert_eq!(*board, reparsed, "round-trip failed for {fen}");
        *visited += 1;

        if depth == 0 {
            return;
        }
        let moves = board.generate_moves();
        for mv in &moves {
            let info = board.make_move(mv);
            walk(board, depth - 1, visited);
            board.unmake_move(mv, info);
        }
    }

    let mut board = Board::new();
    let mut visited = 0;
    walk(&mut board, 3, &mut visited);
    // 1 + 20 + 400 + 8902
    assert_eq!(visited, 9323);
}
