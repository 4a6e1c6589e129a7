//! Restriction term: reward positions where the opponent has little
//! room to move.
//!
//! Mobility is estimated from attack maps rather than by generating
//! both sides' legal moves (which would cost a full movegen per
//! evaluation). The estimate counts the squares the opponent attacks
//! that are not blocked by their own pieces, a reasonable stand-in for
//! their legal move count.

use crate::board::{Board, Color, Move, Piece};

use super::{EvalTerm, MoveDelta, PhaseScore};
use crate::board::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};

// An unbothered middlegame army lands around this many squares.
const MOBILITY_BASELINE: i32 = 36;
const RESTRICT_MG: i32 = 6;
const RESTRICT_EG: i32 = 2;

pub(crate) struct Restriction;

impl EvalTerm for Restriction {
    fn value(&self, board: &Board, us: Color) -> PhaseScore {
        let them = us.opponent();
        let their_room =
            (board.attack_map(them) & !board.occupied[them.index()]).popcount() as i32;

        let diff = MOBILITY_BASELINE - their_room;
        PhaseScore::new(RESTRICT_MG * diff, RESTRICT_EG * diff)
    }

    fn estimate_delta(&self, board: &Board, mv: Move) -> Option<MoveDelta> {
        let us = board.side_to_move();
        let them = us.opponent();

        let mut interesting = mv.is_tactical();
        let gives_check = attacks_king_from_destination(board, mv, us, them);
        interesting |= gives_check;

        if !interesting {
            return None;
        }

        let (mg, eg) = if gives_check { (18, 6) } else { (10, 3) };
        Some(MoveDelta {
            delta: PhaseScore::new(mg, eg),
            affects_restriction: true,
        })
    }
}

/// Cheap check detection for ordering: would the moved piece attack the
/// enemy king from its destination square? Discovered checks are
/// missed; that is fine for an ordering hint.
fn attacks_king_from_destination(board: &Board, mv: Move, us: Color, them: Color) -> bool {
    let king_sq = board.king_square(them);
    let to = mv.to();
    let piece = mv
        .promotion_piece()
        .or_else(|| board.piece_of(us, mv.from()));

    let Some(piece) = piece else {
        return false;
    };

    // Occupancy after the move, approximated by vacating the from
    // square; good enough for sliders.
    let occ = (board.all_occupied & !crate::board::Bitboard::from_square(mv.from()))
        | crate::board::Bitboard::from_square(to);

    let attacks = match piece {
        Piece::Pawn => pawn_attacks(us, to),
        Piece::Knight => knight_attacks(to),
        Piece::Bishop => bishop_attacks(to, occ),
        Piece::Rook => rook_attacks(to, occ),
        Piece::Queen => queen_attacks(to, occ),
        Piece::King => king_attacks(to),
    };

    attacks.contains(king_sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_position_reads_the_same_for_both_sides() {
        let board = Board::new();
        assert_eq!(
            Restriction.value(&board, Color::White),
            Restriction.value(&board, Color::Black)
        );
    }

    #[test]
    fn test_cornered_king_is_restricted() {
        // Black has a lone cornered king; white keeps a full army.
        let board = Board::from_fen("7k/8/8/8/8/8/PPP5/1KR5 w - - 0 1");
        let white = Restriction.value(&board, Color::White);
        assert!(white.mg > 0);
    }

    #[test]
    fn test_checking_move_affects_restriction() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4KQ2 w - - 0 1");
        let mv = board.parse_move("f1e2").unwrap();
        let delta = Restriction.estimate_delta(&board, mv).unwrap();
        assert!(delta.affects_restriction);
        assert_eq!(delta.delta.mg, 18);
    }

    #[test]
    fn test_quiet_shuffle_has_no_delta() {
        let mut board = Board::new();
        let mv = board.parse_move("a2a3").unwrap();
        assert!(Restriction.estimate_delta(&board, mv).is_none());
    }
}
