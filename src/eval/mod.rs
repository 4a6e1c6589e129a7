//! Position evaluation.
//!
//! The evaluation is a composition of independent terms, each
//! producing a midgame/endgame score pair from one side's viewpoint.
//! The aggregate is blended into a single centipawn value by the game
//! phase (amount of non-pawn material left on the board).
//!
//! Terms also provide a cheap pre-move score delta used for move
//! ordering; it never has to be exact, only directionally useful.

mod material;
mod pst;
mod restriction;
mod space;

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::board::{Board, Color, Move, Piece};

pub(crate) use material::Material;
pub(crate) use pst::PieceSquares;
pub(crate) use restriction::Restriction;
pub(crate) use space::Space;

/// A midgame/endgame score pair in centipawns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseScore {
    pub mg: i32,
    pub eg: i32,
}

impl PhaseScore {
    pub(crate) const fn new(mg: i32, eg: i32) -> Self {
        PhaseScore { mg, eg }
    }
}

impl Add for PhaseScore {
    type Output = PhaseScore;
    fn add(self, rhs: Self) -> Self {
        PhaseScore::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for PhaseScore {
    fn add_assign(&mut self, rhs: Self) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for PhaseScore {
    type Output = PhaseScore;
    fn sub(self, rhs: Self) -> Self {
        PhaseScore::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for PhaseScore {
    fn sub_assign(&mut self, rhs: Self) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

/// A term's estimated score change for a move, for ordering purposes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MoveDelta {
    pub delta: PhaseScore,
    pub affects_restriction: bool,
}

/// The blended, aggregated delta handed to the move orderer.
#[derive(Clone, Copy, Debug)]
pub struct DeltaEstimate {
    /// Blended centipawn change from the mover's view
    pub cp: i32,
    /// The move plausibly restricts the opponent (capture or check)
    pub affects_restriction: bool,
}

/// One independent evaluation term.
pub(crate) trait EvalTerm {
    /// Prime any caches from a full position.
    fn init(&mut self, _board: &Board) {}

    /// Score pair from `us`'s viewpoint.
    fn value(&self, board: &Board, us: Color) -> PhaseScore;

    /// Incremental update hooks; terms without caches ignore them.
    fn on_make_move(&mut self, _board: &Board, _mv: Move) {}
    fn on_unmake_move(&mut self, _board: &Board, _mv: Move) {}

    /// Cheap pre-move delta for ordering; `None` when the term has
    /// nothing useful to say about the move.
    fn estimate_delta(&self, _board: &Board, _mv: Move) -> Option<MoveDelta> {
        None
    }
}

/// The aggregate evaluator: a list of terms iterated for every query.
pub struct Evaluator {
    terms: Vec<Box<dyn EvalTerm>>,
}

impl Evaluator {
    #[must_use]
    pub fn new() -> Self {
        Evaluator {
            terms: vec![
                Box::new(Material),
                Box::new(PieceSquares),
                Box::new(Space),
                Box::new(Restriction),
            ],
        }
    }

    /// Prime term caches from a full position.
    pub fn init(&mut self, board: &Board) {
        for term in &mut self.terms {
            term.init(board);
        }
    }

    pub(crate) fn on_make_move(&mut self, board: &Board, mv: Move) {
        for term in &mut self.terms {
            term.on_make_move(board, mv);
        }
    }

    pub(crate) fn on_unmake_move(&mut self, board: &Board, mv: Move) {
        for term in &mut self.terms {
            term.on_unmake_move(board, mv);
        }
    }

    /// Blended centipawn evaluation from the side to move's viewpoint.
    #[must_use]
    pub fn eval_stm_cp(&self, board: &Board) -> i32 {
        let us = board.side_to_move();
        let mut total = PhaseScore::default();
        for term in &self.terms {
            total += term.value(board, us);
        }
        blend(board, total)
    }

    /// Blended pre-move delta for move ordering.
    #[must_use]
    pub fn estimate_delta(&self, board: &Board, mv: Move) -> Option<DeltaEstimate> {
        let mut total = PhaseScore::default();
        let mut affects_restriction = false;
        let mut any = false;
        for term in &self.terms {
            if let Some(d) = term.estimate_delta(board, mv) {
                total += d.delta;
                affects_restriction |= d.affects_restriction;
                any = true;
            }
        }
        any.then_some(DeltaEstimate {
            cp: blend(board, total),
            affects_restriction,
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

const PHASE_WEIGHTS: [i32; 6] = [0, 1, 1, 2, 4, 0];
const MAX_PHASE: i32 = 24;

/// Game phase scaled to 0..=256: 256 with full starting material,
/// 0 once all minor and major pieces are traded.
fn phase256(board: &Board) -> i32 {
    let mut phase = 0;
    for color in [Color::White, Color::Black] {
        for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            phase += PHASE_WEIGHTS[piece.index()]
                * board.pieces[color.index()][piece.index()].popcount() as i32;
        }
    }
    phase = phase.min(MAX_PHASE);
    (phase * 256 + MAX_PHASE / 2) / MAX_PHASE
}

/// Blend a score pair into centipawns by the current phase.
fn blend(board: &Board, score: PhaseScore) -> i32 {
    let p = phase256(board);
    (score.mg * p + score.eg * (256 - p) + 128) >> 8
}
