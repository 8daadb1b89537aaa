//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Player, Position, Square};

use crate::app::App;
use crate::layout::ScreenLayout;
use crate::messages;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let title = Paragraph::new(messages::TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), app, pos);
    }

    draw_button(frame, layout.result, app.result_label(), app.engine().status().is_terminal());
    draw_button(frame, layout.restart, app.restart_label(), app.restart_armed());
}

fn mark_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, style) = match app.engine().board().get(pos) {
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
        Square::Empty => match app.preview(pos) {
            Some(player) => (
                player.to_string(),
                mark_style(player)
                    .remove_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::DIM),
            ),
            None => ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        },
    };

    let style = if app.is_empty_highlighted(pos) {
        style.bg(Color::Indexed(236))
    } else {
        style
    };

    let border = if app.hover() == Some(pos) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, active: bool) {
    let style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
