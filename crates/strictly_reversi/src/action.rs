//! First-class action types for Reversi.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in Reversi: a player placing a disc at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their disc.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Creates a move from raw coordinates, rejecting any off the board.
    #[instrument]
    pub fn at(player: Player, row: i32, col: i32) -> Result<Self, MoveError> {
        Position::new(row, col)
            .map(|position| Self::new(player, position))
            .ok_or(MoveError::OutOfBounds(row, col))
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is not on the board.
    #[display("Coordinate ({}, {}) is off the board", _0, _1)]
    OutOfBounds(i32, i32),

    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The move brackets no opponent discs in any direction.
    #[display("Move at {} captures nothing", _0)]
    NoCapture(Position),

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
