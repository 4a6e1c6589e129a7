//! FEN parsing and emission, plus coordinate-notation move parsing.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, Move, Piece, Square};

/// The standard starting position.
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The parser is strict: the board section must describe exactly
    /// 8 ranks of exactly 8 files, and each side must have exactly one
    /// king. The halfmove and fullmove fields may be omitted and
    /// default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for ch in rank_str.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(FenError::InvalidPiece { ch });
                    }
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(ch).ok_or(FenError::InvalidPiece { ch })?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::BadFileCount {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square::new(rank, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::BadFileCount { rank, files: file });
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if fields[2] != "-" {
            for ch in fields[2].chars() {
                match ch {
                    'K' => board.castling_rights.set(Color::White, true),
                    'Q' => board.castling_rights.set(Color::White, false),
                    'k' => board.castling_rights.set(Color::Black, true),
                    'q' => board.castling_rights.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { ch }),
                }
            }
        }

        board.en_passant_target = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        if let Some(half) = fields.get(4) {
            board.halfmove_clock = half.parse().map_err(|_| FenError::InvalidClock {
                found: (*half).to_string(),
            })?;
        }
        if let Some(full) = fields.get(5) {
            board.fullmove_number = full.parse().map_err(|_| FenError::InvalidClock {
                found: (*full).to_string(),
            })?;
        }

        let white_kings = board.pieces[Color::White.index()][Piece::King.index()].popcount();
        let black_kings = board.pieces[Color::Black.index()][Piece::King.index()].popcount();
        if white_kings != 1 || black_kings != 1 {
            return Err(FenError::BadKingCount);
        }

        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Emit the position as a six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = if self.side_to_move == Color::White {
            "w"
        } else {
            "b"
        };

        let mut castling = String::new();
        if self.castling_rights.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling_rights.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling_rights.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling_rights.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") by
    /// matching it against the current legal moves.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }

        let from = text
            .get(0..2)
            .and_then(Square::from_algebraic)
            .ok_or_else(|| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })?;
        let to = text
            .get(2..4)
            .and_then(Square::from_algebraic)
            .ok_or_else(|| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })?;

        let promotion = if text.len() == 5 {
            let ch = text.chars().nth(4).unwrap_or(' ');
            let piece =
                Piece::from_char(ch).ok_or(MoveParseError::InvalidPromotion { ch })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { ch });
            }
            Some(piece)
        } else {
            None
        };

        let legal = self.generate_moves();
        for mv in &legal {
            if mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion {
                return Ok(mv);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
