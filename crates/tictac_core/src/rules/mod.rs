//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls these
//! after every placement; tests call them directly on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, check_winner, is_winning_move};
