//! Disc counting and the end-of-game winner.

use super::super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Disc totals for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("X {} - O {}", x, o)]
pub struct Score {
    /// Discs owned by X.
    pub x: usize,
    /// Discs owned by O.
    pub o: usize,
}

impl Score {
    /// Counts discs on the board.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        Self {
            x: board.count(Player::X),
            o: board.count(Player::O),
        }
    }

    /// Returns the player holding more discs, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}
