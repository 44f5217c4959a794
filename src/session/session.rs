//! The interactive game session and its move executor
//!
//! [`GameSession`] is the single writer over all game state. The input
//! collaborator drives it with three commands (cursor selection, relative
//! cursor movement, confirm); every invalid command degrades to a silent
//! no-op, so the input layer never has to handle an error channel.
//!
//! # State Machine
//!
//! ```text
//! AwaitingSelection -> PieceHeld      confirm on a piece of the side to move
//! PieceHeld -> AwaitingSelection     confirm on anything but a highlighted square
//! PieceHeld -> TurnCommitted         confirm on a highlighted destination
//! TurnCommitted -> AwaitingSelection automatic, same ply, after bookkeeping
//! any -> GameEnded                   checkmate / stalemate / move limit
//! ```
//!
//! `GameEnded` is terminal; no further selection or move input is accepted.

use tracing::{debug, info, warn};

use crate::board::{Piece, PieceColor, PieceType, Position, PositionSetup};
use crate::error::MoveRejection;
use crate::rules::{self, oracle};

use super::castling::{self, CastlingRights};
use super::game_over::GameOverState;
use super::history::{MoveHistory, MoveRecord};
use super::turn::CurrentTurn;

/// Full-move count at which the game is forcibly ended
const MOVE_LIMIT: u32 = 50;

/// Plies (counting the committing one) an en passant mark stays alive
const PASSANT_PLIES: u8 = 2;

/// Where the session currently sits in the input state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No piece held; confirming picks up a piece
    AwaitingSelection,
    /// A piece is held and its legal destinations are highlighted
    PieceHeld,
    /// A move was just applied; transient, resolved within the same command
    TurnCommitted,
    /// Terminal: no further input is accepted
    GameEnded,
}

/// Board mutation performed by [`GameSession::apply_move`]
struct AppliedMove {
    /// The moved piece as it now stands on the destination
    piece: Piece,
    /// Class of the captured piece, en passant victims included
    captured: Option<PieceType>,
    /// Whether the capture was en passant
    is_en_passant: bool,
}

/// One game of chess: position, cursor, turn state, and termination
///
/// Single-threaded and synchronous; callers serialize access. Constructed
/// either at the standard starting position or from a pre-parsed imported
/// setup.
#[derive(Clone, Debug)]
pub struct GameSession {
    position: Position,
    cursor: (u8, u8),
    picked: Option<(u8, u8)>,
    turn: CurrentTurn,
    white_castling: CastlingRights,
    black_castling: CastlingRights,
    game_over: GameOverState,
    phase: Phase,
    history: MoveHistory,
}

impl GameSession {
    /// A fresh game at the standard starting position
    pub fn new() -> Self {
        Self::from_setup(&PositionSetup::standard())
    }

    /// Start a game from an imported, pre-parsed setup
    pub fn from_setup(setup: &PositionSetup) -> Self {
        let mut position = Position::from_setup(setup);

        // cursor starts on the near-side queenside corner, like the terminal
        // client expects
        let cursor = (0, 7);
        position.square_mut(cursor.0, cursor.1).selected = true;

        Self {
            position,
            cursor,
            picked: None,
            turn: CurrentTurn {
                color: setup.side_to_move,
                halfmoves: setup.halfmoves,
                fullmoves: setup.fullmoves,
            },
            white_castling: setup.white_castling,
            black_castling: setup.black_castling,
            game_over: GameOverState::Playing,
            phase: Phase::AwaitingSelection,
            history: MoveHistory::default(),
        }
    }

    // === Commands (driven by the input collaborator) ===

    /// Move the selection cursor to an absolute square; off-board is a no-op
    pub fn select_cursor(&mut self, file: u8, rank: u8) {
        self.select_cursor_at(i16::from(file), i16::from(rank));
    }

    /// Move the selection cursor by an offset; off-board is a no-op
    pub fn move_cursor_by(&mut self, file_off: i16, rank_off: i16) {
        let (file, rank) = self.cursor;
        self.select_cursor_at(i16::from(file) + file_off, i16::from(rank) + rank_off);
    }

    /// Confirm the square under the cursor: pick a piece, commit a move, or
    /// release the held piece
    ///
    /// All invalid confirmations degrade to no-ops; the rejection cause is
    /// only logged.
    pub fn confirm_selection(&mut self) {
        if let Err(rejection) = self.try_confirm() {
            debug!("[INPUT] input ignored: {rejection}");
        }
    }

    // === Read-only queries (for the rendering collaborator) ===

    /// The current position, including per-square flags
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The color whose turn it is
    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color
    }

    /// Committed plies so far
    pub fn halfmoves(&self) -> u32 {
        self.turn.halfmoves
    }

    /// Current move number
    pub fn fullmoves(&self) -> u32 {
        self.turn.fullmoves
    }

    /// `color`'s remaining castling rights
    pub fn castling_rights(&self, color: PieceColor) -> CastlingRights {
        match color {
            PieceColor::White => self.white_castling,
            PieceColor::Black => self.black_castling,
        }
    }

    /// Terminal state, `Playing` while the game is live
    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// Current input state-machine phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cursor coordinates
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Source square of the held piece, if one is held
    pub fn picked(&self) -> Option<(u8, u8)> {
        self.picked
    }

    /// Moves committed so far
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    // === Internals ===

    fn select_cursor_at(&mut self, file: i16, rank: i16) {
        if self.phase == Phase::GameEnded {
            debug!("[INPUT] game is over; cursor ignored");
            return;
        }
        if Position::is_off_board(file, rank) {
            debug!(
                "[INPUT] cursor ignored: {}",
                MoveRejection::OffBoardCoordinate { file, rank }
            );
            return;
        }

        let (old_file, old_rank) = self.cursor;
        self.position.square_mut(old_file, old_rank).selected = false;

        self.cursor = (file as u8, rank as u8);
        self.position.square_mut(self.cursor.0, self.cursor.1).selected = true;
    }

    fn try_confirm(&mut self) -> Result<(), MoveRejection> {
        if self.phase == Phase::GameEnded {
            debug!("[INPUT] game is over; selection ignored");
            return Ok(());
        }

        let (file, rank) = self.cursor;
        let square = *self.position.square(file, rank);

        // a highlighted square under the cursor is a chosen destination
        if square.highlighted {
            if let Some(from) = self.picked {
                return self.commit(from, (file, rank));
            }
        }

        match square.piece {
            Some(piece) if piece.color == self.turn.color => {
                self.pick(file, rank);
                Ok(())
            }
            _ if self.picked.is_some() => {
                self.release();
                Err(MoveRejection::DestinationNotLegal { file, rank })
            }
            Some(_) => {
                self.release();
                Err(MoveRejection::NotMoversTurn { file, rank })
            }
            None => {
                self.release();
                Err(MoveRejection::NoPieceAtSquare { file, rank })
            }
        }
    }

    /// Hold the piece at `(file, rank)` and highlight its legal destinations
    fn pick(&mut self, file: u8, rank: u8) {
        self.clear_pick_state();

        let opponent = self.turn.color.opposite();
        let (legal_moves, _) = rules::generate(&self.position, file, rank, opponent, true);

        for &(move_file, move_rank) in &legal_moves {
            self.position.square_mut(move_file, move_rank).highlighted = true;
        }

        self.position.square_mut(file, rank).picked = true;
        self.picked = Some((file, rank));
        self.phase = Phase::PieceHeld;

        debug!(
            "[INPUT] picked ({}, {}) with {} legal destinations",
            file,
            rank,
            legal_moves.len()
        );
    }

    /// Drop the held piece and return to awaiting selection
    fn release(&mut self) {
        self.clear_pick_state();
        self.phase = Phase::AwaitingSelection;
    }

    fn clear_pick_state(&mut self) {
        if let Some((file, rank)) = self.picked.take() {
            self.position.square_mut(file, rank).picked = false;
        }
        self.position.clear_highlights();
    }

    /// Transfer the piece and resolve captures, reverting on self-check
    ///
    /// Touches only pieces, never transient flags, so a revert restores the
    /// position bit for bit. The legality filter prunes self-checking
    /// candidates before they can be chosen, which makes the revert branch a
    /// defensive invariant rather than a reachable path.
    fn apply_move(&mut self, from: (u8, u8), to: (u8, u8)) -> Result<AppliedMove, MoveRejection> {
        let mover = self.turn.color;
        let snapshot = self.position;

        let Some(mut piece) = self.position.square_mut(from.0, from.1).piece.take() else {
            return Err(MoveRejection::NoPieceAtSquare {
                file: from.0,
                rank: from.1,
            });
        };
        piece.moves += 1;

        let destination = self.position.square_mut(to.0, to.1);
        let destination_was_eligible = destination.passant_eligible();
        let captured_piece = destination.piece.replace(piece);

        // a pawn arriving diagonally on an eligible square takes the pawn
        // behind the destination (same file, source rank)
        let is_en_passant = piece.piece_type == PieceType::Pawn
            && destination_was_eligible
            && from.0 != to.0
            && captured_piece.is_none();
        let mut captured = captured_piece.map(|taken| taken.piece_type);
        if is_en_passant {
            captured = self
                .position
                .square_mut(to.0, from.1)
                .piece
                .take()
                .map(|taken| taken.piece_type);
        }

        if oracle::is_king_in_check(mover, mover.opposite(), &self.position) {
            self.position = snapshot;
            return Err(MoveRejection::SelfCheckViolation);
        }

        Ok(AppliedMove {
            piece,
            captured,
            is_en_passant,
        })
    }

    /// Commit a move from the held piece's square to a chosen destination
    fn commit(&mut self, from: (u8, u8), to: (u8, u8)) -> Result<(), MoveRejection> {
        let mover = self.turn.color;
        let opponent = mover.opposite();

        let applied = match self.apply_move(from, to) {
            Ok(applied) => applied,
            Err(rejection) => {
                // the piece stays on its source square, available to re-pick
                self.release();
                warn!("[MOVE] commit reverted: {rejection}");
                return Err(rejection);
            }
        };
        self.phase = Phase::TurnCommitted;

        // a double pawn advance marks the skipped square for the reply ply
        if applied.piece.piece_type == PieceType::Pawn
            && applied.piece.moves == 1
            && from.1.abs_diff(to.1) == 2
        {
            let skipped_rank = (from.1 + to.1) / 2;
            self.position.square_mut(to.0, skipped_rank).passant_timer = PASSANT_PLIES;
        }

        self.update_castling_rights(mover, applied.piece.piece_type, from, to, applied.captured);

        self.history.add_move(MoveRecord {
            piece_type: applied.piece.piece_type,
            piece_color: mover,
            from,
            to,
            captured: applied.captured,
            is_en_passant: applied.is_en_passant,
        });

        self.clear_pick_state();
        self.position.tick_passant_timers();

        // winning conditions for the side about to move
        if oracle::is_stalemate(opponent, mover, &self.position) {
            if oracle::is_king_in_check(opponent, mover, &self.position) {
                self.game_over = GameOverState::Checkmate { winner: mover };
                info!("[GAME] checkmate: {mover:?} wins");
            } else {
                self.game_over = GameOverState::Stalemate;
                info!("[GAME] stalemate: {opponent:?} has no legal moves");
            }
        }

        self.turn.advance();

        if !self.game_over.is_game_over() && self.turn.fullmoves >= MOVE_LIMIT {
            self.game_over = GameOverState::MoveLimit;
            info!("[GAME] move limit reached at move {}", self.turn.fullmoves);
        }

        self.phase = if self.game_over.is_game_over() {
            Phase::GameEnded
        } else {
            Phase::AwaitingSelection
        };

        debug!(
            "[MOVE] {:?} {:?} ({}, {}) -> ({}, {}){}",
            mover,
            applied.piece.piece_type,
            from.0,
            from.1,
            to.0,
            to.1,
            if applied.captured.is_some() {
                " (capture)"
            } else {
                ""
            }
        );

        Ok(())
    }

    /// Invalidate castling rights affected by this move
    ///
    /// A king move clears both of its color's rights; a rook leaving a home
    /// corner clears that wing; capturing a rook on its home corner clears
    /// the opponent's wing.
    fn update_castling_rights(
        &mut self,
        mover: PieceColor,
        piece_type: PieceType,
        from: (u8, u8),
        to: (u8, u8),
        captured: Option<PieceType>,
    ) {
        match piece_type {
            PieceType::King => *self.castling_mut(mover) = CastlingRights::none(),
            PieceType::Rook if castling::is_home_corner(mover, from.0, from.1) => {
                self.castling_mut(mover).revoke_for_corner(from.0);
            }
            _ => {}
        }

        if captured == Some(PieceType::Rook)
            && castling::is_home_corner(mover.opposite(), to.0, to.1)
        {
            self.castling_mut(mover.opposite()).revoke_for_corner(to.0);
        }
    }

    fn castling_mut(&mut self, color: PieceColor) -> &mut CastlingRights {
        match color {
            PieceColor::White => &mut self.white_castling,
            PieceColor::Black => &mut self.black_castling,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
