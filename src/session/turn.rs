//! Turn tracking
//!
//! Single source of truth for whose turn it is and how far the game has
//! progressed. The half-move counter increments every committed ply; the
//! full-move counter increments only when Black completes a move, matching
//! standard chess numbering.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays -> advance() -> Black plays -> advance() -> Move 2: White plays
//! ```

use serde::{Deserialize, Serialize};

use crate::board::PieceColor;

/// Side to move plus ply/move counters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    /// The player who moves next
    pub color: PieceColor,
    /// Committed plies since the start counter was imported
    pub halfmoves: u32,
    /// Move number in chess notation, incremented after Black's ply
    pub fullmoves: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            halfmoves: 0,
            fullmoves: 1,
        }
    }
}

impl CurrentTurn {
    /// Advance past a committed ply: bump counters and flip the side to move
    pub fn advance(&mut self) {
        self.halfmoves += 1;
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.fullmoves += 1;
                PieceColor::White
            }
        };
    }
}
