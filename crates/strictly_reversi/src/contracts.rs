//! Contract-based validation for Reversi.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, ReversiInvariants};
use super::rules::capture;
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the mover is the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player() != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the target cell holds no disc.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().get(mov.position()).is_empty() {
            Err(MoveError::SquareOccupied(mov.position()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move must bracket at least one opponent run.
pub struct CapturesSomething;

impl CapturesSomething {
    /// Checks that some direction forms a capturing line.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if capture::is_capturing_move(game.board(), mov.position(), mov.player()) {
            Ok(())
        } else {
            Err(MoveError::NoCapture(mov.position()))
        }
    }
}

/// Composite precondition: right player, empty cell, at least one capture.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        CapturesSomething::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Target cell must be empty
/// - Move must capture
///
/// Postconditions:
/// - Exactly one disc added
/// - Center never emptied
/// - Player to move can move
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.plies() != before.plies() + 1 {
            warn!(before = before.plies(), after = after.plies(), "Ply counter skipped");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: ply counter did not advance by one".to_string(),
            ));
        }
        ReversiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violation after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameResult, GameSetup, Player, Position};

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_precondition_legal_opening() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::X, pos(2, 4));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::X, pos(3, 4));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_no_capture() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::X, pos(0, 0));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::NoCapture(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::O, pos(2, 3));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::X, pos(2, 4));

        match game.clone().make_move(action) {
            Ok(GameResult::InProgress(after)) => {
                assert!(MoveContract::post(&game, &after).is_ok());
            }
            other => panic!("Expected in-progress game, got {:?}", other),
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start_default();
        let action = Move::new(Player::X, pos(2, 4));

        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) {
            after.board.set(pos(0, 0), Cell::Occupied(Player::O));
            assert!(MoveContract::post(&game, &after).is_err());
        } else {
            panic!("Expected in-progress game");
        }
    }
}
