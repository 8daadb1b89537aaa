//! Fixed labels shown on the result and reset controls.

use tictac_core::{GameStatus, Player};

/// Result control text after X wins.
pub const X_WIN: &str = "X Win!!!";
/// Result control text after O wins.
pub const O_WIN: &str = "O Win!!!";
/// Result control text after a draw.
pub const DRAW: &str = "Draw!!!";
/// Result control text while the game is running.
pub const RESULT: &str = "Result";
/// Reset control text once the game is over.
pub const RESTART: &str = "Restart";
/// Reset control text while the game is running. Also the window title.
pub const TITLE: &str = "Tic Tac Toe";

/// Text for the result control.
pub fn result_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => RESULT,
        GameStatus::Won(Player::X) => X_WIN,
        GameStatus::Won(Player::O) => O_WIN,
        GameStatus::Draw => DRAW,
    }
}

/// Text for the reset control.
pub fn restart_label(status: GameStatus) -> &'static str {
    if status.is_terminal() { RESTART } else { TITLE }
}
