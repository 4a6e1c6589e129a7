//! Perft divide: per-root-move node counts for movegen debugging.
//!
//! Usage: perft_divide [fen] [depth]

use std::env;
use std::time::Instant;

use basalt::board::{Board, STARTPOS_FEN};

fn main() {
    let args: Vec<String> = env::args().collect();
    let fen = args.get(1).map_or(STARTPOS_FEN, String::as_str);
    let depth: u32 = args.get(2).and_then(|d| d.parse().ok()).unwrap_or(4);

    let mut board = match Board::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad fen: {err}");
            std::process::exit(1);
        }
    };

    println!("perft divide, depth {depth}");
    let start = Instant::now();
    let mut total = 0u64;

    for mv in &board.generate_moves() {
        let info = board.make_move(mv);
        let count = board.perft(depth - 1);
        board.unmake_move(mv, info);
        println!("  {mv}: {count}");
        total += count;
    }

    println!("total: {total} in {:?}", start.elapsed());
}
