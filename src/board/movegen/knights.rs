//! Knight move generation.

use super::super::attack_tables::knight_attacks;
use super::super::{pop_lsb, Board, Color, Move, MoveList, Piece};

impl Board {
    pub(super) fn generate_knight_moves(&self, us: Color, out: &mut MoveList) {
        let them = us.opponent();
        let ours = self.occupied[us.index()];
        let theirs = self.occupied[them.index()];

        for from in self.pieces[us.index()][Piece::Knight.index()].iter() {
            let attacks = knight_attacks(from) & !ours;

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
