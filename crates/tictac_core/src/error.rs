//! Error types for converting raw input into board positions.

use derive_more::{Display, Error};
use tracing::instrument;

/// Raw input did not name a cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Position error: {} at {}:{}", message, file, line)]
pub struct PositionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
