//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewFields { found: usize },
    /// Board section does not describe exactly 8 ranks
    BadRankCount { found: usize },
    /// A rank does not describe exactly 8 files
    BadFileCount { rank: usize, files: usize },
    /// Invalid piece character in the board section
    InvalidPiece { ch: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { ch: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove or fullmove field is not a non-negative integer
    InvalidClock { found: String },
    /// A side is missing a king, or has more than one
    BadKingCount,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::BadRankCount { found } => {
                write!(f, "board section must have 8 ranks, found {found}")
            }
            FenError::BadFileCount { rank, files } => {
                write!(f, "rank {rank} covers {files} files instead of 8")
            }
            FenError::InvalidPiece { ch } => write!(f, "invalid piece character '{ch}'"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { ch } => write!(f, "invalid castling character '{ch}'"),
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => write!(f, "invalid clock field '{found}'"),
            FenError::BadKingCount => write!(f, "each side must have exactly one king"),
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate-notation move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece suffix
    InvalidPromotion { ch: char },
    /// Well-formed, but not a legal move in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { ch } => {
                write!(f, "invalid promotion piece '{ch}'")
            }
            MoveParseError::IllegalMove { notation } => write!(f, "illegal move '{notation}'"),
        }
    }
}

impl std::error::Error for MoveParseError {}
