//! Pre-parsed position import
//!
//! The interchange format itself (FEN-style strings) is owned by an external
//! collaborator; the engine only accepts this already-parsed structure.

use serde::{Deserialize, Serialize};

use super::piece::{PieceColor, PieceType};
use super::position::SIZE;
use crate::session::CastlingRights;

/// Data-driven back-rank layout, files 0..8
const BACK_RANK: [PieceType; SIZE as usize] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A fully described game start: placement plus turn/rights/counter fields
///
/// This mirrors the trailing fields of the standard board-interchange
/// notation, minus any string parsing: the importing collaborator decodes
/// the text and hands the engine this structure.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PositionSetup {
    /// Piece placement, indexed `[file][rank]`; rank 0 is Black's back rank
    pub placement: [[Option<(PieceColor, PieceType)>; SIZE as usize]; SIZE as usize],
    /// Side to move
    pub side_to_move: PieceColor,
    /// White's remaining castling rights
    pub white_castling: CastlingRights,
    /// Black's remaining castling rights
    pub black_castling: CastlingRights,
    /// Square capturable en passant by the side to move, if any
    pub passant_target: Option<(u8, u8)>,
    /// Half-move counter at import
    pub halfmoves: u32,
    /// Full-move counter at import
    pub fullmoves: u32,
}

impl PositionSetup {
    /// The standard initial game
    pub fn standard() -> Self {
        let mut placement = [[None; SIZE as usize]; SIZE as usize];

        for file in 0..SIZE as usize {
            placement[file][0] = Some((PieceColor::Black, BACK_RANK[file]));
            placement[file][1] = Some((PieceColor::Black, PieceType::Pawn));
            placement[file][6] = Some((PieceColor::White, PieceType::Pawn));
            placement[file][7] = Some((PieceColor::White, BACK_RANK[file]));
        }

        Self {
            placement,
            side_to_move: PieceColor::White,
            white_castling: CastlingRights::both(),
            black_castling: CastlingRights::both(),
            passant_target: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// A setup with an empty board and no rights, for composing test or
    /// study positions square by square
    pub fn blank() -> Self {
        Self {
            placement: [[None; SIZE as usize]; SIZE as usize],
            side_to_move: PieceColor::White,
            white_castling: CastlingRights::none(),
            black_castling: CastlingRights::none(),
            passant_target: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// Place a piece, builder style
    pub fn with_piece(mut self, color: PieceColor, piece_type: PieceType, file: u8, rank: u8) -> Self {
        self.placement[file as usize][rank as usize] = Some((color, piece_type));
        self
    }
}

impl Default for PositionSetup {
    fn default() -> Self {
        Self::standard()
    }
}
