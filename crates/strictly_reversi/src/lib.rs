//! Strictly Reversi - pure rules engine for 8x8 Reversi.
//!
//! # Architecture
//!
//! - **Board**: the cell grid, move legality, capture flipping and the
//!   "any legal move" scan
//! - **Rules**: pure functions over a board (bracket search, scoring)
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`, with
//!   contracts and invariants checked on every transition
//!
//! # Example
//!
//! ```
//! use strictly_reversi::{Board, Cell, Player};
//!
//! let mut board = Board::new();
//! assert!(board.is_legal_move(2, 4, Player::X));
//! assert!(board.apply_move(2, 4, Player::X));
//! assert_eq!(board.query(3, 4).unwrap(), Cell::Occupied(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod error;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use board::Board;
pub use error::BoundsError;
pub use phases::{EndPolicy, FinishReason, Outcome};
pub use position::{Direction, Position, in_bounds, parse_coordinates};
pub use rules::{CaptureLine, Score};
pub use types::{BOARD_SIZE, Cell, Player};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
