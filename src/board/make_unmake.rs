//! Applying and reversing moves.

use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

// Corner squares, named for the castling bookkeeping below.
const A1: Square = Square::new(0, 0);
const H1: Square = Square::new(0, 7);
const A8: Square = Square::new(7, 0);
const H8: Square = Square::new(7, 7);

impl Board {
    /// Apply `mv` to the position and return the record needed to
    /// reverse it. `mv` must come from this position's legal or
    /// pseudo-legal move list.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let mut info = UnmakeInfo {
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            captured: None,
        };

        let from = mv.from();
        let to = mv.to();
        let us = self.side_to_move;
        let them = us.opponent();

        // Cleared by default; re-set below on a double push.
        self.en_passant_target = None;

        let moving = self
            .piece_of(us, from)
            .unwrap_or(Piece::Pawn);
        debug_assert!(self.piece_of(us, from).is_some(), "no piece on {from}");

        if mv.is_en_passant() {
            // The captured pawn sits behind the target square.
            let cap_sq = if us == Color::White {
                Square::from_index(to.index() - 8)
            } else {
                Square::from_index(to.index() + 8)
            };
            self.remove_piece(cap_sq, them, Piece::Pawn);
            info.captured = Some((Piece::Pawn, cap_sq));
            self.halfmove_clock = 0;
        } else if mv.is_capture() {
            if let Some(captured) = self.piece_of(them, to) {
                self.remove_piece(to, them, captured);
                info.captured = Some((captured, to));
                self.rights_on_corner_capture(them, to);
            }
            self.halfmove_clock = 0;
        }

        if moving == Piece::Pawn {
            self.halfmove_clock = 0;
        } else if !mv.is_capture() {
            self.halfmove_clock += 1;
        }

        self.remove_piece(from, us, moving);

        if mv.is_castle() {
            self.set_piece(to, us, Piece::King);
            let (rook_from, rook_to) = rook_transit(us, to);
            self.remove_piece(rook_from, us, Piece::Rook);
            self.set_piece(rook_to, us, Piece::Rook);
            self.castling_rights.remove_all(us);
        } else if let Some(promoted) = mv.promotion_piece() {
            self.set_piece(to, us, promoted);
        } else {
            self.set_piece(to, us, moving);
            if mv.is_double_push() {
                // The square jumped over becomes the en passant target.
                let ep = if us == Color::White {
                    Square::from_index(from.index() + 8)
                } else {
                    Square::from_index(from.index() - 8)
                };
                self.en_passant_target = Some(ep);
            }
            self.rights_on_move(us, moving, from);
        }

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;

        info
    }

    /// Reverse `mv`, restoring the exact pre-move state.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let from = mv.from();
        let to = mv.to();
        let us = self.side_to_move;
        let them = us.opponent();

        if mv.is_castle() {
            self.remove_piece(to, us, Piece::King);
            self.set_piece(from, us, Piece::King);
            let (rook_from, rook_to) = rook_transit(us, to);
            self.remove_piece(rook_to, us, Piece::Rook);
            self.set_piece(rook_from, us, Piece::Rook);
        } else if let Some(promoted) = mv.promotion_piece() {
            self.remove_piece(to, us, promoted);
            self.set_piece(from, us, Piece::Pawn);
        } else {
            let moving = self.piece_of(us, to).unwrap_or(Piece::Pawn);
            self.remove_piece(to, us, moving);
            self.set_piece(from, us, moving);
        }

        if let Some((captured, cap_sq)) = info.captured {
            self.set_piece(cap_sq, them, captured);
        }
    }

    /// Moving the king loses both rights; moving a rook off its home
    /// corner loses that wing's right.
    fn rights_on_move(&mut self, color: Color, piece: Piece, from: Square) {
        match piece {
            Piece::King => self.castling_rights.remove_all(color),
            Piece::Rook => {
                let (queenside_corner, kingside_corner) = if color == Color::White {
                    (A1, H1)
                } else {
                    (A8, H8)
                };
                if from == queenside_corner {
                    self.castling_rights.remove(color, false);
                } else if from == kingside_corner {
                    self.castling_rights.remove(color, true);
                }
            }
            _ => {}
        }
    }

    /// Capturing a rook on its home corner destroys the victim's right.
    fn rights_on_corner_capture(&mut self, victim: Color, cap_sq: Square) {
        let (queenside_corner, kingside_corner) = if victim == Color::White {
            (A1, H1)
        } else {
            (A8, H8)
        };
        if cap_sq == queenside_corner {
            self.castling_rights.remove(victim, false);
        } else if cap_sq == kingside_corner {
            self.castling_rights.remove(victim, true);
        }
    }
}

/// Rook start and end squares for a castle landing the king on `king_to`.
fn rook_transit(color: Color, king_to: Square) -> (Square, Square) {
    let rank = if color == Color::White { 0 } else { 7 };
    if king_to.file() == 6 {
        (Square::new(rank, 7), Square::new(rank, 5))
    } else {
        (Square::new(rank, 0), Square::new(rank, 3))
    }
}
