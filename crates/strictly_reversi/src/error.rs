//! Coordinate error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A coordinate fell outside the board, with caller location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is off the board at {}:{}", row, col, file, line)]
pub struct BoundsError {
    /// Offending row.
    pub row: i32,
    /// Offending column.
    pub col: i32,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoundsError {
    /// Creates a new bounds error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(row: i32, col: i32) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
