//! Application state: the game engine plus what only the screen cares about.

use crate::input::Intent;
use crate::messages;
use tictac_core::{GameEngine, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the loop and restore the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    hover: Option<Position>,
    highlight_empty: bool,
    empty_highlighted: bool,
}

impl App {
    /// Creates a new application. `highlight_empty` enables the empty-cell
    /// highlight after X moves.
    pub fn new(highlight_empty: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            hover: None,
            highlight_empty,
            empty_highlighted: false,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the pointer or keyboard cursor.
    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    /// Dimmed mark to draw on `pos`, if it is hovered and playable.
    pub fn preview(&self, pos: Position) -> Option<Player> {
        if self.hover == Some(pos) {
            self.engine.preview(pos)
        } else {
            None
        }
    }

    /// Whether `pos` gets the empty-cell highlight.
    pub fn is_empty_highlighted(&self, pos: Position) -> bool {
        self.empty_highlighted && self.engine.board().is_empty(pos)
    }

    /// Text of the result control.
    pub fn result_label(&self) -> &'static str {
        messages::result_label(self.engine.status())
    }

    /// Text of the reset control.
    pub fn restart_label(&self) -> &'static str {
        messages::restart_label(self.engine.status())
    }

    /// The reset control only responds once the game is over.
    pub fn restart_armed(&self) -> bool {
        self.engine.status().is_terminal()
    }

    /// Applies one user intent.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Flow {
        match intent {
            Intent::Hover(pos) => self.hover_over(pos),
            Intent::Commit(pos) => {
                self.commit(pos);
            }
            Intent::Reset => self.request_reset(),
            Intent::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Moves the hover to `pos` (or clears it).
    pub fn hover_over(&mut self, pos: Option<Position>) {
        if self.hover != pos {
            debug!(?pos, "Hover moved");
            self.hover = pos;
        }
    }

    /// Places the current mark on `pos` and returns the resulting status.
    ///
    /// Occupied cells and finished games leave everything as it was.
    #[instrument(skip(self), fields(turn = %self.engine.turn()))]
    pub fn commit(&mut self, pos: Position) -> GameStatus {
        let Some(mark) = self.engine.preview(pos) else {
            debug!(%pos, "Commit ignored");
            return self.engine.status();
        };

        let status = self.engine.place_mark(pos);
        if self.highlight_empty {
            self.empty_highlighted = mark == Player::X;
        }

        if status.is_terminal() {
            info!(result = self.result_label(), "Game over");
        }
        status
    }

    /// Activates the reset control. Does nothing while the game is running.
    #[instrument(skip(self), fields(status = ?self.engine.status()))]
    pub fn request_reset(&mut self) {
        if !self.restart_armed() {
            debug!("Reset control not armed");
            return;
        }
        self.engine.reset();
        self.hover = None;
        self.empty_highlighted = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_all(app: &mut App, indices: &[usize]) {
        for &i in indices {
            app.commit(Position::from_index(i).unwrap());
        }
    }

    #[test]
    fn test_initial_labels() {
        let app = App::default();
        assert_eq!(app.result_label(), "Result");
        assert_eq!(app.restart_label(), "Tic Tac Toe");
        assert!(!app.restart_armed());
    }

    #[test]
    fn test_preview_only_on_hovered_empty_cell() {
        let mut app = App::default();
        assert_eq!(app.preview(Position::Center), None);

        app.apply(Intent::Hover(Some(Position::Center)));
        assert_eq!(app.preview(Position::Center), Some(Player::X));
        assert_eq!(app.preview(Position::TopLeft), None);

        app.apply(Intent::Commit(Position::Center));
        assert_eq!(app.preview(Position::Center), None);

        app.apply(Intent::Hover(Some(Position::TopLeft)));
        assert_eq!(app.preview(Position::TopLeft), Some(Player::O));

        app.apply(Intent::Hover(None));
        assert_eq!(app.preview(Position::TopLeft), None);
    }

    #[test]
    fn test_win_updates_labels() {
        let mut app = App::default();
        commit_all(&mut app, &[0, 3, 1, 4, 2]);
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(app.result_label(), "X Win!!!");
        assert_eq!(app.restart_label(), "Restart");
        assert!(app.restart_armed());
    }

    #[test]
    fn test_o_win_and_draw_labels() {
        let mut app = App::default();
        commit_all(&mut app, &[0, 2, 1, 5, 3, 8]);
        assert_eq!(app.result_label(), "O Win!!!");

        let mut app = App::default();
        commit_all(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(app.result_label(), "Draw!!!");
        assert_eq!(app.restart_label(), "Restart");
    }

    #[test]
    fn test_reset_inert_while_in_progress() {
        let mut app = App::default();
        commit_all(&mut app, &[4]);
        app.apply(Intent::Reset);
        assert_eq!(app.engine().board().occupied(), 1);
        assert_eq!(app.engine().turn(), Player::O);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut app = App::new(true);
        app.apply(Intent::Hover(Some(Position::BottomRight)));
        commit_all(&mut app, &[0, 3, 1, 4, 2]);
        app.apply(Intent::Reset);

        assert_eq!(app.engine(), &GameEngine::new());
        assert_eq!(app.hover(), None);
        assert_eq!(app.result_label(), "Result");
        assert_eq!(app.restart_label(), "Tic Tac Toe");
        assert!(Position::ALL.iter().all(|p| !app.is_empty_highlighted(*p)));
    }

    #[test]
    fn test_commit_after_game_over_is_ignored() {
        let mut app = App::default();
        commit_all(&mut app, &[0, 3, 1, 4, 2]);
        let before = app.engine().clone();
        assert_eq!(app.commit(Position::BottomRight), GameStatus::Won(Player::X));
        assert_eq!(app.engine(), &before);
    }

    #[test]
    fn test_empty_highlight_follows_x_moves() {
        let mut app = App::new(true);
        commit_all(&mut app, &[4]);
        assert!(app.is_empty_highlighted(Position::TopLeft));
        assert!(!app.is_empty_highlighted(Position::Center));

        commit_all(&mut app, &[0]);
        assert!(!app.is_empty_highlighted(Position::BottomRight));

        // Rejected commit keeps the current highlight state.
        commit_all(&mut app, &[8, 8]);
        assert!(app.is_empty_highlighted(Position::TopRight));
    }

    #[test]
    fn test_empty_highlight_off_by_default() {
        let mut app = App::default();
        commit_all(&mut app, &[4]);
        assert!(!app.is_empty_highlighted(Position::TopLeft));
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        assert_eq!(app.apply(Intent::Hover(None)), Flow::Continue);
        assert_eq!(app.apply(Intent::Quit), Flow::Quit);
    }
}
