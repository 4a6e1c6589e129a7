//! basalt, a bitboard chess engine.
//!
//! The crate is organized around three subsystems: the board core
//! (position representation, move generation, make/unmake, hashing),
//! the tapered component evaluation, and the iterative-deepening
//! alpha-beta search with a clustered transposition table. The
//! [`engine::Engine`] façade ties them together for protocol
//! front-ends such as the bundled UCI loop.

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod uci;
