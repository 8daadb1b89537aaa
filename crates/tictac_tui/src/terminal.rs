//! Terminal setup, teardown and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::app::{App, Flow};
use crate::config::TuiConfig;
use crate::input;
use crate::layout::ScreenLayout;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all, fields(mouse = config.mouse(), highlight_empty = config.highlight_empty()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting tictac");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if *config.mouse() {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.highlight_empty());
    let res = run_app(&mut terminal, &mut app);

    restore(&mut terminal, *config.mouse())?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        let mut layout = ScreenLayout::default();
        terminal.draw(|frame| {
            layout = ScreenLayout::compute(frame.area());
            ui::draw(frame, app, &layout);
        })?;

        let event = event::read().context("Failed to read terminal event")?;
        let Some(intent) = input::intent(&event, app.hover(), &layout) else {
            continue;
        };
        debug!(?intent, "Handling intent");

        if app.apply(intent) == Flow::Quit {
            return Ok(());
        }
    }
}

fn restore(terminal: &mut Tui, mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
