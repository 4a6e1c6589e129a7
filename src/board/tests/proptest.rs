//! Property-based tests over random game walks.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use crate::board::zobrist::compute_key;
use crate::board::{Board, Move, UnmakeInfo};

fn walk_length() -> impl Strategy<Value = usize> {
    1..=40usize
}

proptest! {
    /// make_move followed by unmake_move restores the board exactly,
    /// along any random line of play.
    #[test]
    fn prop_make_unmake_restores_state(seed in any::<u64>(), plies in walk_length()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();
        for _ in 0..plies {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv);
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Legal moves never leave the mover in check.
    #[test]
    fn prop_legal_moves_never_self_check(seed in any::<u64>(), plies in walk_length()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            let us = board.side_to_move();
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            for mv in &moves {
                let info = board.make_move(mv);
                prop_assert!(!board.is_in_check(us), "move {} leaves check", mv);
                board.unmake_move(mv, info);
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            board.make_move(mv);
        }
    }

    /// FEN round-trips to an identical position from anywhere reachable.
    #[test]
    fn prop_fen_roundtrip(seed in any::<u64>(), plies in walk_length()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            board.make_move(mv);
        }

        let fen = board.to_fen();
        let reparsed = Board::try_from_fen(&fen).expect("emitted FEN must parse");
        prop_assert_eq!(&board, &reparsed);
        prop_assert_eq!(compute_key(&board), compute_key(&reparsed));
    }
}
