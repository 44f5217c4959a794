//! Rejection taxonomy for session commands
//!
//! Every rejection is recoverable and silent: the session degrades the
//! offending command to a no-op and stays in its current state, so these
//! values never cross the public API. They exist so the internal command
//! layer has one typed vocabulary for why input was ignored, and so logs and
//! tests can name the cause precisely.

/// Why a selection or move command was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// Coordinate outside the 8x8 grid
    #[error("coordinate ({file}, {rank}) is off the board")]
    OffBoardCoordinate { file: i16, rank: i16 },

    /// Confirmed a square with nothing on it
    #[error("no piece at ({file}, {rank})")]
    NoPieceAtSquare { file: u8, rank: u8 },

    /// Confirmed an opponent piece that is not a capture destination
    #[error("piece at ({file}, {rank}) does not belong to the side to move")]
    NotMoversTurn { file: u8, rank: u8 },

    /// Confirmed a destination the legality filter did not offer
    #[error("({file}, {rank}) is not a legal destination")]
    DestinationNotLegal { file: u8, rank: u8 },

    /// A committed move left the mover's own king attacked and was reverted
    ///
    /// The legality filter prunes these before they can be chosen, so this
    /// firing indicates a filter bug; the executor keeps the check as a
    /// defensive invariant.
    #[error("move would leave own king in check")]
    SelfCheckViolation,
}
