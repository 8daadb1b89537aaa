//! Terminal front end for tictac.
//!
//! Wraps a [`tictac_core::GameEngine`] in a ratatui screen. The pointer
//! (or the keyboard cursor) previews the next mark on empty cells, a click
//! commits it, and the reset control starts a new game once the current one
//! is over.
//!
//! # Architecture
//!
//! - **Input**: terminal events become [`Intent`]s
//! - **App**: applies intents to the engine and tracks hover state
//! - **Layout / UI**: one geometry for drawing and mouse hit testing
//! - **Terminal**: raw-mode setup, the blocking event loop, teardown

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
pub mod logging;
pub mod messages;
mod terminal;
mod ui;

pub use app::{App, Flow};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Intent, intent, key_intent, mouse_intent, move_cursor};
pub use layout::ScreenLayout;
pub use terminal::run;
pub use ui::draw;
