//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and position hashing. Supports
//! full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use basalt::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

pub(crate) mod attack_tables;
mod error;
mod fen;
mod legality;
mod make_unmake;
mod movegen;
mod state;
mod types;
pub(crate) mod zobrist;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError};
pub use fen::STARTPOS_FEN;
pub use state::{Board, UnmakeInfo};
pub use types::{Bitboard, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::{pop_lsb, PROMOTION_PIECES};
