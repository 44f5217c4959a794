//! Chess piece movement rules
//!
//! Each piece class is described by a table of direction vectors plus a
//! maximum walk distance, rather than per-class branching logic. Walking a
//! direction stops at the board edge or the first occupied square; whether
//! that square is included depends on who occupies it and whether the walk
//! permits captures. Pawns get the one asymmetric special case: forward
//! steps never capture, diagonal steps only capture (a piece, or an
//! en-passant-eligible square).

use smallvec::SmallVec;

use crate::board::{PieceColor, PieceType, Position};
use crate::rules::legality;

/// Candidate destination list
///
/// 27 destinations is the maximum any piece can have (a centralized queen on
/// an open board), so candidates never spill to the heap.
pub type MoveList = SmallVec<[(u8, u8); 28]>;

/// Sliding pieces walk up to the full board span
const SLIDE_RANGE: u8 = 7;

/// The four rook directions
const ROOK_DIRS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four bishop directions
const BISHOP_DIRS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight compass directions, shared by queen and king
const ROYAL_DIRS: [(i16, i16); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight knight jumps; single-step, so occupants in between are ignored
const KNIGHT_JUMPS: [(i16, i16); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate the moves of the piece at `(file, rank)`
///
/// Returns the candidate destination squares together with an `attacks_king`
/// flag: a walk that reaches the opponent's king reports the attack instead
/// of adding the king's square as a destination, which lets check detection
/// short-circuit without materializing capture-the-king moves.
///
/// With `prune_self_check` set, every candidate is verified on a scratch
/// board and moves that would leave the mover's own king attacked are
/// dropped. Attack computation for the opponent (check detection) must pass
/// `false`, both because pseudo-legal attacks are what defines check and to
/// keep the filter from recursing into itself.
///
/// An empty square yields no moves.
pub fn generate(
    position: &Position,
    file: u8,
    rank: u8,
    opponent: PieceColor,
    prune_self_check: bool,
) -> (MoveList, bool) {
    let mut candidates = MoveList::new();
    let Some(piece) = position.piece_at(file, rank) else {
        return (candidates, false);
    };

    let attacks_king = match piece.piece_type {
        PieceType::Queen => walk_directions(
            position,
            &mut candidates,
            file,
            rank,
            &ROYAL_DIRS,
            SLIDE_RANGE,
            true,
            opponent,
        ),
        PieceType::King => walk_directions(
            position,
            &mut candidates,
            file,
            rank,
            &ROYAL_DIRS,
            1,
            true,
            opponent,
        ),
        PieceType::Rook => walk_directions(
            position,
            &mut candidates,
            file,
            rank,
            &ROOK_DIRS,
            SLIDE_RANGE,
            true,
            opponent,
        ),
        PieceType::Bishop => walk_directions(
            position,
            &mut candidates,
            file,
            rank,
            &BISHOP_DIRS,
            SLIDE_RANGE,
            true,
            opponent,
        ),
        PieceType::Knight => walk_directions(
            position,
            &mut candidates,
            file,
            rank,
            &KNIGHT_JUMPS,
            1,
            true,
            opponent,
        ),
        PieceType::Pawn => {
            let forward = piece.color.pawn_direction();
            let steps = if piece.moves == 0 { 2 } else { 1 };

            // forward steps never capture
            walk_directions(
                position,
                &mut candidates,
                file,
                rank,
                &[(0, forward)],
                steps,
                false,
                opponent,
            );

            pawn_captures(position, &mut candidates, file, rank, forward, opponent)
        }
    };

    if prune_self_check {
        legality::prune_self_checking(position, (file, rank), piece.color, &mut candidates);
    }

    (candidates, attacks_king)
}

/// Walk each direction outward up to `max_steps`, collecting candidates
///
/// Stops at the board edge or the first occupied square. An occupied square
/// is included only when held by the opponent and `can_capture` is set; the
/// opponent's king instead raises the returned `attacks_king` flag.
#[allow(clippy::too_many_arguments)]
fn walk_directions(
    position: &Position,
    candidates: &mut MoveList,
    file: u8,
    rank: u8,
    directions: &[(i16, i16)],
    max_steps: u8,
    can_capture: bool,
    opponent: PieceColor,
) -> bool {
    let mut attacks_king = false;

    for &(file_off, rank_off) in directions {
        for step in 1..=i16::from(max_steps) {
            let walk_file = i16::from(file) + file_off * step;
            let walk_rank = i16::from(rank) + rank_off * step;
            if Position::is_off_board(walk_file, walk_rank) {
                break;
            }

            let (walk_file, walk_rank) = (walk_file as u8, walk_rank as u8);
            match position.piece_at(walk_file, walk_rank) {
                Some(occupant) => {
                    if occupant.color == opponent && can_capture {
                        if occupant.piece_type == PieceType::King {
                            attacks_king = true;
                        } else {
                            push_unique(candidates, (walk_file, walk_rank));
                        }
                    }
                    break;
                }
                None => push_unique(candidates, (walk_file, walk_rank)),
            }
        }
    }

    attacks_king
}

/// Pawn diagonal captures, including en passant
///
/// A diagonal square is a candidate only when it holds an opponent piece or
/// is flagged en-passant-eligible; a diagonal onto the opponent's king
/// reports the attack instead.
fn pawn_captures(
    position: &Position,
    candidates: &mut MoveList,
    file: u8,
    rank: u8,
    forward: i16,
    opponent: PieceColor,
) -> bool {
    let mut attacks_king = false;
    let ahead = i16::from(rank) + forward;

    for file_off in [-1, 1] {
        let walk_file = i16::from(file) + file_off;
        if Position::is_off_board(walk_file, ahead) {
            continue;
        }

        let (walk_file, walk_rank) = (walk_file as u8, ahead as u8);
        let square = position.square(walk_file, walk_rank);
        match square.piece {
            Some(occupant) if occupant.color == opponent => {
                if occupant.piece_type == PieceType::King {
                    attacks_king = true;
                } else {
                    push_unique(candidates, (walk_file, walk_rank));
                }
            }
            None if square.passant_eligible() => push_unique(candidates, (walk_file, walk_rank)),
            _ => {}
        }
    }

    attacks_king
}

/// Add a destination unless an earlier walk already produced it
fn push_unique(candidates: &mut MoveList, destination: (u8, u8)) {
    if !candidates.contains(&destination) {
        candidates.push(destination);
    }
}
