//! Space term: safe control of the opponent's half.

use crate::board::{Bitboard, Board, Color, Move, Piece};

use super::{EvalTerm, MoveDelta, PhaseScore};

const SPACE_MG: i32 = 4;
const SPACE_EG: i32 = 1;

fn opponent_half(us: Color) -> Bitboard {
    if us == Color::White {
        Bitboard::TOP_HALF
    } else {
        Bitboard::BOTTOM_HALF
    }
}

pub(crate) struct Space;

impl EvalTerm for Space {
    fn value(&self, board: &Board, us: Color) -> PhaseScore {
        let them = us.opponent();
        let our_attacks = board.attack_map(us);
        let their_attacks = board.attack_map(them);

        // Squares we control in their half, unoccupied by us and
        // uncontested by them.
        let safe = our_attacks
            & opponent_half(us)
            & !board.occupied[us.index()]
            & !their_attacks;

        let count = safe.popcount() as i32;
        PhaseScore::new(SPACE_MG * count, SPACE_EG * count)
    }

    fn estimate_delta(&self, board: &Board, mv: Move) -> Option<MoveDelta> {
        let us = board.side_to_move();
        if board.piece_of(us, mv.from()) != Some(Piece::Pawn) {
            return None;
        }

        // Pawn advances into the opponent's half tend to gain space.
        if opponent_half(us).contains(mv.to()) {
            return Some(MoveDelta {
                delta: PhaseScore::new(12, 2),
                affects_restriction: false,
            });
        }
        None
    }
}
