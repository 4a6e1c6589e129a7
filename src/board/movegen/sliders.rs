//! Bishop, rook and queen move generation.

use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{pop_lsb, Board, Color, Move, MoveList, Piece};

impl Board {
    pub(super) fn generate_slider_moves(&self, us: Color, piece: Piece, out: &mut MoveList) {
        let them = us.opponent();
        let occ = self.all_occupied;
        let ours = self.occupied[us.index()];
        let theirs = self.occupied[them.index()];

        for from in self.pieces[us.index()][piece.index()].iter() {
            let attacks = match piece {
                Piece::Bishop => bishop_attacks(from, occ),
                Piece::Rook => rook_attacks(from, occ),
                _ => queen_attacks(from, occ),
            } & !ours;

            let mut quiets = attacks & !theirs;
            while !quiets.is_empty() {
                out.push(Move::quiet(from, pop_lsb(&mut quiets)));
            }
            let mut captures = attacks & theirs;
            while !captures.is_empty() {
                out.push(Move::capture(from, pop_lsb(&mut captures)));
            }
        }
    }
}
