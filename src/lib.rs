//! Rules engine for a terminal chess game
//!
//! Implements the full move/legality/termination logic of chess for a
//! cursor-driven terminal client: board state, per-piece move generation,
//! check/checkmate/stalemate detection, and move execution with en passant
//! and castling-rights bookkeeping.
//!
//! # Architecture
//!
//! The crate is layered bottom-up, each layer depending only on the ones
//! below it:
//!
//! - [`board`] - squares, pieces, and the 8x8 [`board::Position`] value type
//! - [`rules`] - move generation, legality filtering, and the check/stalemate
//!   oracle, all pure functions over a [`board::Position`]
//! - [`session`] - the [`session::GameSession`] state machine that owns the
//!   position, the cursor, and the turn/termination bookkeeping
//!
//! Rendering, keyboard dispatch, FEN parsing, and networking are external
//! collaborators: they drive the session through its three commands
//! (`select_cursor`, `move_cursor_by`, `confirm_selection`) and read state
//! back through its query methods. The engine itself performs no I/O.
//!
//! Everything is single-threaded and synchronous; a [`session::GameSession`]
//! assumes exactly one writer.

pub mod board;
pub mod error;
pub mod rules;
pub mod session;

pub use board::{Piece, PieceColor, PieceType, Position, PositionSetup, Square};
pub use error::MoveRejection;
pub use session::{
    CastlingRights, CurrentTurn, GameOverState, GameSession, MoveHistory, MoveRecord, Phase,
};
