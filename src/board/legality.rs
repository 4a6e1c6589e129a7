//! Square-attack and check predicates.

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use super::{Bitboard, Board, Color, Piece, Square};

impl Board {
    /// Returns true if any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let occ = self.all_occupied;
        let them = &self.pieces[by.index()];

        // A pawn of `by` attacks sq iff sq pawn-attacks (from the other
        // side's view) reach that pawn.
        if !(pawn_attacks(by.opponent(), sq) & them[Piece::Pawn.index()]).is_empty() {
            return true;
        }
        if !(knight_attacks(sq) & them[Piece::Knight.index()]).is_empty() {
            return true;
        }
        if !(king_attacks(sq) & them[Piece::King.index()]).is_empty() {
            return true;
        }
        let diag = them[Piece::Bishop.index()] | them[Piece::Queen.index()];
        if !(bishop_attacks(sq, occ) & diag).is_empty() {
            return true;
        }
        let line = them[Piece::Rook.index()] | them[Piece::Queen.index()];
        !(rook_attacks(sq, occ) & line).is_empty()
    }

    /// Returns true if `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Union of all squares attacked by `color` through the current
    /// occupancy. Used by the evaluation's space and restriction terms.
    pub(crate) fn attack_map(&self, color: Color) -> Bitboard {
        let occ = self.all_occupied;
        let us = &self.pieces[color.index()];
        let mut attacks = Bitboard::EMPTY;

        for sq in us[Piece::Pawn.index()].iter() {
            attacks |= pawn_attacks(color, sq);
        }
        for sq in us[Piece::Knight.index()].iter() {
            attacks |= knight_attacks(sq);
        }
        for sq in us[Piece::Bishop.index()].iter() {
            attacks |= bishop_attacks(sq, occ);
        }
        for sq in us[Piece::Rook.index()].iter() {
            attacks |= rook_attacks(sq, occ);
        }
        for sq in us[Piece::Queen.index()].iter() {
            attacks |= queen_attacks(sq, occ);
        }
        for sq in us[Piece::King.index()].iter() {
            attacks |= king_attacks(sq);
        }

        attacks
    }
}
