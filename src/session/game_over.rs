//! Terminal game state
//!
//! Starts as `Playing` and transitions at most once, when the executor
//! detects a finished game. All non-`Playing` states are terminal: the
//! session stops accepting selection and move input.
//!
//! # State Transitions
//!
//! ```text
//! Playing -> Checkmate { winner } / Stalemate / MoveLimit
//! ```

use serde::{Deserialize, Serialize};

use crate::board::PieceColor;

/// How (and whether) the game has ended
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,
    /// The side to move was in check with no legal moves
    Checkmate { winner: PieceColor },
    /// The side to move was not in check but had no legal moves
    Stalemate,
    /// The full-move counter reached the fixed cap
    MoveLimit,
}

impl GameOverState {
    /// Whether the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// The winning color, `None` for draws and ongoing games
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Whether the game ended without a winner
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOverState::Stalemate | GameOverState::MoveLimit)
    }

    /// Human-readable result line for the rendering collaborator
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::Checkmate {
                winner: PieceColor::White,
            } => "White wins by checkmate!",
            GameOverState::Checkmate {
                winner: PieceColor::Black,
            } => "Black wins by checkmate!",
            GameOverState::Stalemate => "Draw by stalemate",
            GameOverState::MoveLimit => "Game ended at the move limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_playing() {
        let state = GameOverState::default();
        assert_eq!(state, GameOverState::Playing);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_terminal_states_are_game_over() {
        let states = [
            GameOverState::Checkmate {
                winner: PieceColor::White,
            },
            GameOverState::Checkmate {
                winner: PieceColor::Black,
            },
            GameOverState::Stalemate,
            GameOverState::MoveLimit,
        ];

        for state in states {
            assert!(state.is_game_over(), "{state:?} should be terminal");
        }
    }

    #[test]
    fn test_winner_only_for_checkmate() {
        assert_eq!(
            GameOverState::Checkmate {
                winner: PieceColor::Black
            }
            .winner(),
            Some(PieceColor::Black)
        );
        assert_eq!(GameOverState::Stalemate.winner(), None);
        assert_eq!(GameOverState::MoveLimit.winner(), None);
    }

    #[test]
    fn test_draw_classification() {
        assert!(GameOverState::Stalemate.is_draw());
        assert!(GameOverState::MoveLimit.is_draw());
        assert!(!GameOverState::Checkmate {
            winner: PieceColor::White
        }
        .is_draw());
        assert!(!GameOverState::Playing.is_draw());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            GameOverState::Checkmate {
                winner: PieceColor::White
            }
            .message(),
            "White wins by checkmate!"
        );
        assert_eq!(GameOverState::Stalemate.message(), "Draw by stalemate");
    }
}
