//! Board unit tests.

mod fen;
mod movegen;
mod perft;
mod proptest;
