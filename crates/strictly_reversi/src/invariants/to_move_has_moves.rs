//! Mobility invariant: an in-progress game always has a playable turn.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: the player to move has at least one legal move.
///
/// Blocked turns are resolved (pass or finish) before a game is handed back.
pub struct ToMoveHasMovesInvariant;

impl Invariant<GameInProgress> for ToMoveHasMovesInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.board().has_legal_move(game.to_move())
    }

    fn description() -> &'static str {
        "Player to move has a legal move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameSetup, Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::new().start_default();
        assert!(ToMoveHasMovesInvariant::holds(&game));
    }

    #[test]
    fn test_wiped_opponent_violates() {
        let mut game = GameSetup::new().start_default();
        for (row, col) in [(3, 4), (4, 3)] {
            game.board.set(Position::new(row, col).unwrap(), Cell::Occupied(Player::X));
        }
        assert!(!ToMoveHasMovesInvariant::holds(&game));
    }
}
