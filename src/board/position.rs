//! Board position representation
//!
//! [`Position`] is a plain `Copy` value type holding the full 8x8 grid.
//! Making it `Copy` keeps speculative move simulation (the legality filter's
//! scratch boards) a stack copy with no allocation.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceColor, PieceType};
use super::setup::PositionSetup;
use super::square::Square;

/// Number of files/ranks on the board
pub const SIZE: u8 = 8;

/// The 8x8 grid of squares, indexed `[file][rank]`
///
/// Rank 0 is Black's back rank (top of a terminal rendering), rank 7 is
/// White's. Coordinates are always `(file, rank)` with both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    squares: [[Square; SIZE as usize]; SIZE as usize],
}

impl Position {
    /// A board with no pieces and no transient state
    pub fn empty() -> Self {
        Self {
            squares: [[Square::default(); SIZE as usize]; SIZE as usize],
        }
    }

    /// Build a position from a pre-parsed setup structure
    ///
    /// Placement only; side to move, castling rights, and counters live on
    /// the session. An imported en passant target square becomes eligible for
    /// the ply about to be played.
    pub fn from_setup(setup: &PositionSetup) -> Self {
        let mut position = Self::empty();

        for (file, rank) in Self::coords() {
            if let Some((color, piece_type)) = setup.placement[file as usize][rank as usize] {
                position.square_mut(file, rank).piece = Some(Piece::new(color, piece_type));
            }
        }

        if let Some((file, rank)) = setup.passant_target {
            if !Self::is_off_board(i16::from(file), i16::from(rank)) {
                position.square_mut(file, rank).passant_timer = 1;
            }
        }

        position
    }

    /// Whether `(file, rank)` falls outside the board
    pub fn is_off_board(file: i16, rank: i16) -> bool {
        file < 0 || file >= i16::from(SIZE) || rank < 0 || rank >= i16::from(SIZE)
    }

    /// Iterate every coordinate pair, file-major
    pub fn coords() -> impl Iterator<Item = (u8, u8)> {
        (0..SIZE).flat_map(|file| (0..SIZE).map(move |rank| (file, rank)))
    }

    /// The square at `(file, rank)`
    pub fn square(&self, file: u8, rank: u8) -> &Square {
        &self.squares[file as usize][rank as usize]
    }

    /// Mutable access to the square at `(file, rank)`
    pub fn square_mut(&mut self, file: u8, rank: u8) -> &mut Square {
        &mut self.squares[file as usize][rank as usize]
    }

    /// The piece at `(file, rank)`, if any
    pub fn piece_at(&self, file: u8, rank: u8) -> Option<Piece> {
        self.square(file, rank).piece
    }

    /// Whether the square at `(file, rank)` holds no piece
    pub fn is_empty(&self, file: u8, rank: u8) -> bool {
        self.square(file, rank).is_empty()
    }

    /// Locate `color`'s king
    ///
    /// Returns `None` only for malformed positions; guarding against those is
    /// the importer's responsibility, and callers degrade quietly.
    pub fn king_square(&self, color: PieceColor) -> Option<(u8, u8)> {
        Self::coords().find(|&(file, rank)| {
            self.piece_at(file, rank)
                .is_some_and(|piece| piece.piece_type == PieceType::King && piece.color == color)
        })
    }

    /// Clear every destination highlight
    pub fn clear_highlights(&mut self) {
        for (file, rank) in Self::coords() {
            self.square_mut(file, rank).highlighted = false;
        }
    }

    /// Decrement every en passant countdown by one ply
    pub fn tick_passant_timers(&mut self) {
        for (file, rank) in Self::coords() {
            let square = self.square_mut(file, rank);
            square.passant_timer = square.passant_timer.saturating_sub(1);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_position_has_no_pieces() {
        let position = Position::empty();
        assert!(Position::coords().all(|(f, r)| position.is_empty(f, r)));
    }

    #[test]
    fn test_off_board_bounds() {
        assert!(Position::is_off_board(-1, 0));
        assert!(Position::is_off_board(0, -1));
        assert!(Position::is_off_board(8, 0));
        assert!(Position::is_off_board(0, 8));
        assert!(!Position::is_off_board(0, 0));
        assert!(!Position::is_off_board(7, 7));
    }

    #[test]
    fn test_king_square_lookup() {
        let mut position = Position::empty();
        position.square_mut(4, 7).piece = Some(Piece::new(PieceColor::White, PieceType::King));

        assert_eq!(position.king_square(PieceColor::White), Some((4, 7)));
        assert_eq!(position.king_square(PieceColor::Black), None);
    }

    #[test]
    fn test_passant_timer_tick_saturates() {
        let mut position = Position::empty();
        position.square_mut(3, 2).passant_timer = 2;

        position.tick_passant_timers();
        assert_eq!(position.square(3, 2).passant_timer, 1);
        assert!(position.square(3, 2).passant_eligible());

        position.tick_passant_timers();
        position.tick_passant_timers();
        assert_eq!(position.square(3, 2).passant_timer, 0);
        assert!(!position.square(3, 2).passant_eligible());
    }

    #[test]
    fn test_clear_highlights() {
        let mut position = Position::empty();
        position.square_mut(1, 1).highlighted = true;
        position.square_mut(6, 6).highlighted = true;

        position.clear_highlights();
        assert!(Position::coords().all(|(f, r)| !position.square(f, r).highlighted));
    }
}
