//! One cell of the board grid

use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// A single square: an optional piece plus transient per-square state
///
/// The `selected`/`picked`/`highlighted` flags exist for the rendering
/// collaborator and carry no rules meaning of their own; the rules layer only
/// writes them. `passant_timer` is the en passant eligibility countdown: it
/// holds the number of plies (including the one being committed) for which
/// the square can still be captured onto en passant, and is decremented once
/// per committed ply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Piece occupying this square, if any
    pub piece: Option<Piece>,
    /// Square currently under the selection cursor
    pub selected: bool,
    /// Square holding the picked-up piece (move source)
    pub picked: bool,
    /// Square marked as a legal destination for the picked piece
    pub highlighted: bool,
    /// En passant eligibility countdown, zero when not eligible
    pub passant_timer: u8,
}

impl Square {
    /// Whether no piece occupies this square
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Whether a pawn may currently capture onto this square en passant
    pub fn passant_eligible(&self) -> bool {
        self.passant_timer > 0
    }
}
