//! Tic-tac-toe game logic.
//!
//! A small, pure state machine: a 3x3 board, the player to move, and the
//! game status. No I/O and no rendering; front ends hold a [`GameEngine`]
//! and drive it through two mutating calls.
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameEngine, GameStatus, Player, Position};
//!
//! let mut game = GameEngine::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//! ] {
//!     game.place_mark(pos);
//! }
//! assert_eq!(game.place_mark(Position::TopRight), GameStatus::Won(Player::X));
//!
//! game.reset();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, GameSnapshot};
pub use error::PositionError;
pub use position::Position;
pub use rules::WIN_PATTERNS;
pub use types::{Board, GameStatus, Player, Square};

/// Alias used by front ends that talk about marks rather than players.
pub type Mark = Player;
