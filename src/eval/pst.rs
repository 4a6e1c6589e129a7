//! Piece-square tables, phase-split.
//!
//! Tables are written visually (rank 8 first) and stored from white's
//! perspective; black lookups mirror along the ranks.

use crate::board::{Board, Color, Move, Piece, Square};

use super::{EvalTerm, MoveDelta, PhaseScore};

#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    80, 80, 80, 80, 80, 80, 80, 80,
    50, 50, 50, 50, 50, 50, 50, 50,
    30, 30, 30, 30, 30, 30, 30, 30,
    20, 20, 20, 20, 20, 20, 20, 20,
    10, 10, 10, 10, 10, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
   -50,-40,-30,-20,-20,-30,-40,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-50,-50,
];

const MG_TABLES: [&[i32; 64]; 6] = [&PAWN_MG, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING_MG];
const EG_TABLES: [&[i32; 64]; 6] = [&PAWN_EG, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING_EG];

/// Table value for a piece of `color` on `sq`.
fn pst(piece: Piece, sq: Square, color: Color) -> PhaseScore {
    // The visual literals above put rank 8 first, so a white-perspective
    // lookup mirrors the square; a black one reads it directly.
    let idx = if color == Color::White {
        sq.mirror().index()
    } else {
        sq.index()
    };
    PhaseScore::new(MG_TABLES[piece.index()][idx], EG_TABLES[piece.index()][idx])
}

pub(crate) struct PieceSquares;

impl EvalTerm for PieceSquares {
    fn value(&self, board: &Board, us: Color) -> PhaseScore {
        let them = us.opponent();
        let mut score = PhaseScore::default();

        for p_idx in 0..6 {
            let piece = match Piece::from_index(p_idx) {
                Some(p) => p,
                None => continue,
            };
            for sq in board.pieces[us.index()][p_idx].iter() {
                score += pst(piece, sq, us);
            }
            for sq in board.pieces[them.index()][p_idx].iter() {
                score -= pst(piece, sq, them);
            }
        }

        score
    }

    fn estimate_delta(&self, board: &Board, mv: Move) -> Option<MoveDelta> {
        let us = board.side_to_move();
        let them = us.opponent();
        let from = mv.from();
        let to = mv.to();

        let moved = board.piece_of(us, from)?;
        let mut delta = PhaseScore::default();

        if let Some(promoted) = mv.promotion_piece() {
            delta += pst(promoted, to, us);
            delta -= pst(Piece::Pawn, from, us);
        } else {
            delta += pst(moved, to, us);
            delta -= pst(moved, from, us);
        }

        // Removing the victim also removes its positional value.
        if mv.is_en_passant() {
            let cap_sq = if us == Color::White {
                Square::from_index(to.index() - 8)
            } else {
                Square::from_index(to.index() + 8)
            };
            delta += pst(Piece::Pawn, cap_sq, them);
        } else if mv.is_capture() {
            if let Some(captured) = board.piece_of(them, to) {
                delta += pst(captured, to, them);
            }
        }

        Some(MoveDelta {
            delta,
            affects_restriction: false,
        })
    }
}
