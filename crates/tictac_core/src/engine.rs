//! The tic-tac-toe game engine.
//!
//! [`GameEngine`] owns the board, the turn and the status. It is the only
//! writer of game state: presentation code reads through the accessors and
//! mutates through [`GameEngine::place_mark`] and [`GameEngine::reset`].

use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
}

/// Serializable copy of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move next (or the player who ended the game).
    pub turn: Player,
    /// Game status.
    pub status: GameStatus,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next placement will use.
    ///
    /// Once the game is over this stays on the player who made the last move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a mark may be placed at `pos` right now.
    pub fn can_place(&self, pos: Position) -> bool {
        self.status.is_in_progress() && self.board.is_empty(pos)
    }

    /// The mark a placement at `pos` would put down, if it is allowed.
    pub fn preview(&self, pos: Position) -> Option<Player> {
        self.can_place(pos).then_some(self.turn)
    }

    /// Returns a serializable copy of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
        }
    }

    /// Places the current player's mark at `pos` and returns the new status.
    ///
    /// Placing on an occupied square or after the game has ended does
    /// nothing and returns the unchanged status.
    #[instrument(skip(self), fields(player = %self.turn, status = ?self.status))]
    pub fn place_mark(&mut self, pos: Position) -> GameStatus {
        if !self.can_place(pos) {
            debug!(%pos, "Ignoring placement");
            return self.status;
        }

        let mark = self.turn;
        self.board.set(pos, Square::Occupied(mark));

        if rules::is_winning_move(&self.board, mark) {
            self.status = GameStatus::Won(mark);
            info!(winner = %mark, board = %self.board.display(), "Game won");
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!(board = %self.board.display(), "Game drawn");
        } else {
            self.turn = mark.opponent();
            debug!(next = %self.turn, "Turn passes");
        }

        self.status
    }

    /// Starts over: empty board, X to move, game in progress.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
