//! Screen geometry shared by drawing and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictac_core::Position;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the result and reset controls.
pub const BUTTON_WIDTH: u16 = 17;

/// Where every widget sits for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Board cells, indexed like [`Position::to_index`].
    pub cells: [Rect; 9],
    /// Result control.
    pub result: Rect,
    /// Reset control.
    pub restart: Rect,
}

impl ScreenLayout {
    /// Computes the layout for `area`.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Title
                Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
                Constraint::Length(3),                // Controls
            ])
            .split(area);

        let board = center_rect(chunks[1], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); 3])
            .split(board);

        let mut cells = [Rect::default(); 9];
        for (r, row) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(*row);
            for (c, cell) in cols.iter().enumerate() {
                cells[r * 3 + c] = *cell;
            }
        }

        let controls = center_rect(chunks[2], BUTTON_WIDTH * 2 + 2, 3);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(2),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(controls);

        Self {
            title: chunks[0],
            cells,
            result: buttons[0],
            restart: buttons[2],
        }
    }

    /// The area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// The board cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
    }

    /// Whether a terminal coordinate falls on the reset control.
    pub fn is_restart(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_cells_form_a_grid() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cell(pos);
            assert_eq!((cell.width, cell.height), (CELL_WIDTH, CELL_HEIGHT));
            let origin = layout.cell(Position::TopLeft);
            assert_eq!(cell.x, origin.x + pos.col() as u16 * CELL_WIDTH);
            assert_eq!(cell.y, origin.y + pos.row() as u16 * CELL_HEIGHT);
        }
    }

    #[test]
    fn test_cell_at_hits_every_cell() {
        let layout = layout();
        for pos in Position::ALL {
            let cell = layout.cell(pos);
            assert_eq!(layout.cell_at(cell.x, cell.y), Some(pos));
            assert_eq!(
                layout.cell_at(cell.x + cell.width - 1, cell.y + cell.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_cell_at_misses_outside_board() {
        let layout = layout();
        assert_eq!(layout.cell_at(0, 0), None);
        let br = layout.cell(Position::BottomRight);
        assert_eq!(layout.cell_at(br.x + br.width, br.y), None);
    }

    #[test]
    fn test_controls_sit_below_board() {
        let layout = layout();
        let bottom = layout.cell(Position::BottomLeft);
        assert!(layout.restart.y >= bottom.y + bottom.height);
        assert_eq!(layout.restart.width, BUTTON_WIDTH);
        assert!(layout.result.x + layout.result.width <= layout.restart.x);
        assert!(layout.is_restart(layout.restart.x, layout.restart.y));
        assert!(!layout.is_restart(layout.result.x, layout.result.y));
    }
}
