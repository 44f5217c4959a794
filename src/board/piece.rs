//! Piece types

use serde::{Deserialize, Serialize};

/// Color of a piece, also used for the side to move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other color
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank delta of a forward pawn step for this color
    ///
    /// Rank 0 is Black's back rank, rank 7 is White's, so White pawns advance
    /// toward lower ranks and Black pawns toward higher ranks.
    pub fn pawn_direction(self) -> i16 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Rank on which this color's king and rooks start
    pub fn home_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

/// Class of a chess piece
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Queen,
    #[default]
    King,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece on the board
///
/// `moves` counts how many times this piece has moved; it detects a pawn's
/// first move (double advance) and drives castling-rights invalidation.
/// Pieces are owned by the square they occupy and transferred, not copied,
/// when moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
    pub moves: u32,
}

impl Piece {
    /// A piece that has not moved yet
    pub fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self {
            color,
            piece_type,
            moves: 0,
        }
    }
}
