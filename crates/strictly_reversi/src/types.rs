//! Core domain types for Reversi.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Player in the game.
///
/// Only the two seats exist here; emptiness lives on [`Cell`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (Player1, moves first).
    X,
    /// Player O (Player2).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the seat label used on the console ("Player1" / "Player2").
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "Player1",
            Player::O => "Player2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A cell on the Reversi board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's disc.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the disc in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns true if the cell holds no disc.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the cell holds a disc owned by `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_symmetric() {
        for player in <Player as strum::IntoEnumIterator>::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_cell_ownership() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Player::O).owner(), Some(Player::O));
        assert!(Cell::Occupied(Player::X).is_owned_by(Player::X));
        assert!(!Cell::Occupied(Player::X).is_owned_by(Player::O));
        assert!(!Cell::Empty.is_owned_by(Player::X));
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::X.to_string(), "Player1");
        assert_eq!(Player::O.to_string(), "Player2");
    }
}
