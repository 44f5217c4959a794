//! Move history

use serde::{Deserialize, Serialize};

use crate::board::{PieceColor, PieceType};

/// Record of one committed move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_type: PieceType,
    pub piece_color: PieceColor,
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub captured: Option<PieceType>,
    pub is_en_passant: bool,
}

/// Chronological list of committed moves
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the last move made
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}
