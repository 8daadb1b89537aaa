//! Translates terminal events into game intents.

use crate::layout::ScreenLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictac_core::Position;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pointer or cursor moved onto a cell, or off the board (`None`).
    Hover(Option<Position>),
    /// Place the current mark on a cell.
    Commit(Position),
    /// Activate the reset control.
    Reset,
    /// Leave the game.
    Quit,
}

/// Where the keyboard cursor starts when nothing is hovered.
pub const HOME: Position = Position::Center;

/// Maps any terminal event to an intent. `hover` is the current cursor cell.
pub fn intent(event: &Event, hover: Option<Position>, layout: &ScreenLayout) -> Option<Intent> {
    match event {
        Event::Key(key) => key_intent(*key, hover),
        Event::Mouse(mouse) => mouse_intent(*mouse, layout),
        _ => None,
    }
}

/// Keyboard mapping: arrows/hjkl move, Enter/Space and 1-9 commit, `r` resets.
pub fn key_intent(key: KeyEvent, hover: Option<Position>) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') => Some(Intent::Reset),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Intent::Commit)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(match hover {
            Some(pos) => Intent::Commit(pos),
            None => Intent::Hover(Some(HOME)),
        }),
        code @ (KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('h' | 'j' | 'k' | 'l')) => {
            let cursor = hover.unwrap_or(HOME);
            let moved = move_cursor(cursor, code);
            (moved != cursor || hover.is_none()).then_some(Intent::Hover(Some(moved)))
        }
        _ => None,
    }
}

/// Mouse mapping: motion hovers, left click commits or resets.
pub fn mouse_intent(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(Intent::Hover(layout.cell_at(mouse.column, mouse.row)))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
                Some(Intent::Commit(pos))
            } else if layout.is_restart(mouse.column, mouse.row) {
                Some(Intent::Reset)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys (or h/j/k/l). Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_move_cursor() {
        use Position::*;
        assert_eq!(move_cursor(Center, KeyCode::Left), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Char('k')), TopCenter);
        assert_eq!(move_cursor(TopRight, KeyCode::Right), TopRight);
        assert_eq!(move_cursor(BottomLeft, KeyCode::Down), BottomLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Char('j')), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Tab), Center);
    }

    #[test]
    fn test_digit_keys_commit() {
        assert_eq!(
            key_intent(press(KeyCode::Char('1')), None),
            Some(Intent::Commit(Position::TopLeft))
        );
        assert_eq!(
            key_intent(press(KeyCode::Char('9')), None),
            Some(Intent::Commit(Position::BottomRight))
        );
        assert_eq!(key_intent(press(KeyCode::Char('0')), None), None);
    }

    #[test]
    fn test_enter_commits_cursor_or_shows_it() {
        assert_eq!(
            key_intent(press(KeyCode::Enter), Some(Position::TopRight)),
            Some(Intent::Commit(Position::TopRight))
        );
        assert_eq!(
            key_intent(press(KeyCode::Enter), None),
            Some(Intent::Hover(Some(HOME)))
        );
    }

    #[test]
    fn test_arrows_hover() {
        assert_eq!(
            key_intent(press(KeyCode::Up), Some(Position::Center)),
            Some(Intent::Hover(Some(Position::TopCenter)))
        );
        assert_eq!(key_intent(press(KeyCode::Up), Some(Position::TopCenter)), None);
        assert_eq!(
            key_intent(press(KeyCode::Left), None),
            Some(Intent::Hover(Some(Position::MiddleLeft)))
        );
    }

    #[test]
    fn test_quit_and_reset_keys() {
        assert_eq!(key_intent(press(KeyCode::Char('q')), None), Some(Intent::Quit));
        assert_eq!(key_intent(press(KeyCode::Esc), None), Some(Intent::Quit));
        assert_eq!(
            key_intent(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), None),
            Some(Intent::Quit)
        );
        assert_eq!(key_intent(press(KeyCode::Char('r')), None), Some(Intent::Reset));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_intent(release, None), None);
    }

    #[test]
    fn test_mouse_intents() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let center = layout.cell(Position::Center);

        assert_eq!(
            mouse_intent(mouse(MouseEventKind::Moved, center.x + 1, center.y + 1), &layout),
            Some(Intent::Hover(Some(Position::Center)))
        );
        assert_eq!(
            mouse_intent(mouse(MouseEventKind::Moved, 0, 0), &layout),
            Some(Intent::Hover(None))
        );
        assert_eq!(
            mouse_intent(
                mouse(MouseEventKind::Down(MouseButton::Left), center.x, center.y),
                &layout
            ),
            Some(Intent::Commit(Position::Center))
        );
        assert_eq!(
            mouse_intent(
                mouse(MouseEventKind::Down(MouseButton::Left), layout.restart.x, layout.restart.y),
                &layout
            ),
            Some(Intent::Reset)
        );
        assert_eq!(
            mouse_intent(
                mouse(MouseEventKind::Down(MouseButton::Right), center.x, center.y),
                &layout
            ),
            None
        );
    }

    #[test]
    fn test_resize_event_has_no_intent() {
        let layout = ScreenLayout::default();
        assert_eq!(intent(&Event::Resize(10, 10), None, &layout), None);
    }
}
