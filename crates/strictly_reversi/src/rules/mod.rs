//! Game rules for Reversi.
//!
//! This module contains pure functions for evaluating board state
//! according to Reversi rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod capture;
pub mod score;

pub use capture::{CaptureLine, bracket, capturing_lines, is_capturing_move};
pub use score::Score;
