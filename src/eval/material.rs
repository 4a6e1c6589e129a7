//! Material balance term.

use crate::board::{Board, Color, Move, Piece};

use super::{EvalTerm, MoveDelta, PhaseScore};

pub(crate) struct Material;

impl EvalTerm for Material {
    fn value(&self, board: &Board, us: Color) -> PhaseScore {
        let them = us.opponent();
        let mut balance = 0;
        // Pawn through queen; the king has no material value.
        for piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ] {
            let v = piece.value();
            balance += v * board.pieces[us.index()][piece.index()].popcount() as i32;
            balance -= v * board.pieces[them.index()][piece.index()].popcount() as i32;
        }
        PhaseScore::new(balance, balance)
    }

    fn estimate_delta(&self, board: &Board, mv: Move) -> Option<MoveDelta> {
        let them = board.side_to_move().opponent();
        let mut gain = 0;

        if mv.is_en_passant() {
            gain += Piece::Pawn.value();
        } else if mv.is_capture() {
            if let Some(captured) = board.piece_of(them, mv.to()) {
                gain += captured.value();
            }
        }

        if let Some(promoted) = mv.promotion_piece() {
            gain += promoted.value() - Piece::Pawn.value();
        }

        (gain != 0).then_some(MoveDelta {
            delta: PhaseScore::new(gain, gain),
            affects_restriction: false,
        })
    }
}
