//! Legality filtering via speculative move simulation
//!
//! Chess legality needs one ply of lookahead: a pseudo-legal move is illegal
//! if it leaves the mover's own king attacked. Rather than computing full
//! legal-move sets for every piece up front, candidates are generated
//! cheaply and each one is replayed on a scratch copy of the position, then
//! checked with the oracle. [`crate::board::Position`] is `Copy`, so the
//! scratch board is a stack copy, not a heap clone.

use crate::board::{PieceColor, PieceType, Position};
use crate::rules::oracle;

/// Replay a move on a scratch copy of `position`
///
/// Applies the same board mutation the executor would commit: the piece
/// transfers from source to destination, and a pawn arriving diagonally on
/// an en-passant-eligible square also removes the pawn behind the
/// destination. Keeping the simulation and the executor in agreement is what
/// makes the executor's post-commit self-check test a pure safety net.
pub fn simulate_move(position: &Position, from: (u8, u8), to: (u8, u8)) -> Position {
    let mut scratch = *position;

    let piece = scratch.square_mut(from.0, from.1).piece.take();
    let destination = scratch.square_mut(to.0, to.1);
    let en_passant = destination.is_empty()
        && destination.passant_eligible()
        && from.0 != to.0
        && piece.is_some_and(|p| p.piece_type == PieceType::Pawn);
    destination.piece = piece;

    if en_passant {
        scratch.square_mut(to.0, from.1).piece = None;
    }

    scratch
}

/// Drop every candidate that would leave `mover`'s king attacked
///
/// Iterates in reverse so removal never skips an element. Never called on
/// the opponent-attack path: check detection uses unpruned generation.
pub fn prune_self_checking(
    position: &Position,
    from: (u8, u8),
    mover: PieceColor,
    candidates: &mut crate::rules::MoveList,
) {
    let opponent = mover.opposite();

    for index in (0..candidates.len()).rev() {
        let scratch = simulate_move(position, from, candidates[index]);
        if oracle::is_king_in_check(mover, opponent, &scratch) {
            candidates.remove(index);
        }
    }
}
