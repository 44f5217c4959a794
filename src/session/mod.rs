//! Interactive game session
//!
//! [`GameSession`] owns everything mutable - the position, the selection
//! cursor, turn counters, castling rights, history, and the terminal state -
//! and is passed explicitly wherever it is needed; there is no ambient
//! global. One session is one game, so multiple concurrent games are just
//! multiple sessions.

pub mod castling;
pub mod game_over;
pub mod history;
pub mod turn;

mod session;

pub use castling::CastlingRights;
pub use game_over::GameOverState;
pub use history::{MoveHistory, MoveRecord};
pub use session::{GameSession, Phase};
pub use turn::CurrentTurn;
