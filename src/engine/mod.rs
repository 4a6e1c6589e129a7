//! Protocol-agnostic engine façade.
//!
//! Front-ends (UCI here; anything text-based in principle) interact
//! with the core exclusively through this type: load a position, run a
//! bounded search, read the report.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::warn;

use crate::board::{Board, FenError};
use crate::search::{think, Limits, SearchReport, SearchState};

/// Default transposition table budget in MiB.
pub const DEFAULT_TT_MB: usize = 64;

/// The engine: a position plus persistent search state.
pub struct Engine {
    board: Board,
    state: SearchState,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Engine {
            board: Board::new(),
            state: SearchState::new(DEFAULT_TT_MB),
        }
    }

    /// Reset to the standard starting position.
    pub fn new_game(&mut self) {
        self.board = Board::new();
    }

    /// Load a FEN and forward-play `moves` in coordinate notation.
    ///
    /// A malformed FEN fails the whole call and leaves the previous
    /// position intact. Move tokens that do not parse, or that are not
    /// legal in the position they are applied to, are skipped; dirty
    /// input should not end a session.
    pub fn set_position(&mut self, fen: &str, moves: &[&str]) -> Result<(), FenError> {
        let mut board = Board::try_from_fen(fen)?;
        for token in moves {
            match board.parse_move(token) {
                Ok(mv) => {
                    board.make_move(mv);
                }
                Err(err) => {
                    warn!("skipping move token '{token}': {err}");
                }
            }
        }
        self.board = board;
        Ok(())
    }

    /// Search the current position within `limits`.
    pub fn search(&mut self, limits: &Limits) -> SearchReport {
        think(&mut self.board, &mut self.state, limits)
    }

    /// The engine is fully in-memory; readiness is immediate.
    #[must_use]
    pub fn ready(&self) -> bool {
        true
    }

    /// Flag a front-end can set to abort a running search.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.state.stop_handle()
    }

    /// The current position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
