//! Check and stalemate detection
//!
//! Read-only queries over a position. Both answers reduce to move
//! generation: a king is in check when some opponent piece's pseudo-legal
//! attack generation reports it, and a side is stuck when its king and then
//! every other piece have zero legal (self-check-pruned) moves. The caller
//! separates checkmate from stalemate by also asking [`is_king_in_check`].

use crate::board::{PieceColor, PieceType, Position};
use crate::rules::piece_moves;

/// Whether `color`'s king is attacked by any `opponent` piece
///
/// Runs unpruned generation for each opponent piece and short-circuits on
/// the first reported king attack.
pub fn is_king_in_check(color: PieceColor, opponent: PieceColor, position: &Position) -> bool {
    debug_assert_eq!(color.opposite(), opponent);

    Position::coords().any(|(file, rank)| {
        position
            .piece_at(file, rank)
            .is_some_and(|piece| piece.color == opponent)
            && piece_moves::generate(position, file, rank, color, false).1
    })
}

/// Whether `color` has zero legal moves
///
/// Checks the king's own pruned moves first, then every other piece of
/// `color`. Because pruning already discards self-checking moves, a nonzero
/// count for any piece proves an escape (including block/capture escapes
/// from check) exists. A `true` result means checkmate when `color` is also
/// in check, stalemate otherwise.
pub fn is_stalemate(color: PieceColor, opponent: PieceColor, position: &Position) -> bool {
    let Some((king_file, king_rank)) = position.king_square(color) else {
        // malformed import; the importer guards this precondition
        return false;
    };

    let (king_moves, _) = piece_moves::generate(position, king_file, king_rank, opponent, true);
    if !king_moves.is_empty() {
        return false;
    }

    let stuck = |(file, rank): (u8, u8)| {
        let is_other_piece = position
            .piece_at(file, rank)
            .is_some_and(|piece| piece.color == color && piece.piece_type != PieceType::King);
        if !is_other_piece {
            return true;
        }
        piece_moves::generate(position, file, rank, opponent, true)
            .0
            .is_empty()
    };

    Position::coords().all(stuck)
}
