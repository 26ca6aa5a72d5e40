//! Bracket search: which opponent discs a move would flip.

use super::super::{Board, Cell, Direction, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A run of opponent discs bracketed by the mover along one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureLine {
    /// Direction walked from the move's target cell.
    pub direction: Direction,
    /// Opponent discs on the line, nearest first. Never empty.
    pub flips: Vec<Position>,
}

/// Walks from `origin` in `direction` and returns the opponent run if the
/// mover's own disc closes it off.
///
/// Running off the board or into an empty cell yields `None`, as does
/// meeting the mover's disc before any opponent disc.
pub fn bracket(
    board: &Board,
    origin: Position,
    direction: Direction,
    player: Player,
) -> Option<CaptureLine> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let mut cursor = origin.step(direction);

    while let Some(pos) = cursor {
        match board.get(pos) {
            Cell::Occupied(owner) if owner == opponent => {
                run.push(pos);
                cursor = pos.step(direction);
            }
            Cell::Occupied(_) => {
                return (!run.is_empty()).then_some(CaptureLine {
                    direction,
                    flips: run,
                });
            }
            Cell::Empty => return None,
        }
    }

    None
}

/// Returns every capturing line for `player` moving at `origin`.
///
/// An occupied target yields no lines.
#[instrument(skip(board))]
pub fn capturing_lines(board: &Board, origin: Position, player: Player) -> Vec<CaptureLine> {
    if !board.get(origin).is_empty() {
        return Vec::new();
    }
    Direction::all()
        .filter_map(|direction| bracket(board, origin, direction, player))
        .collect()
}

/// Returns true if `player` moving at `origin` captures in at least one direction.
///
/// Stops at the first capturing line.
pub fn is_capturing_move(board: &Board, origin: Position, player: Player) -> bool {
    board.get(origin).is_empty()
        && Direction::all().any(|direction| bracket(board, origin, direction, player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_bracket_south() {
        let board = Board::new();
        let line = bracket(&board, pos(2, 4), Direction::South, Player::X).unwrap();
        assert_eq!(line.flips, vec![pos(3, 4)]);
    }

    #[test]
    fn test_no_bracket_without_opponent_run() {
        let board = Board::new();
        // X's own disc sits directly below (2,3).
        assert!(bracket(&board, pos(2, 3), Direction::South, Player::X).is_none());
        assert!(bracket(&board, pos(0, 0), Direction::SouthEast, Player::X).is_none());
    }

    #[test]
    fn test_run_off_edge_captures_nothing() {
        let mut board = Board::from_cells([[Cell::Empty; 8]; 8]);
        board.set(pos(0, 1), Cell::Occupied(Player::O));
        board.set(pos(0, 2), Cell::Occupied(Player::O));
        // Nothing closes the run before the edge.
        assert!(bracket(&board, pos(0, 0), Direction::East, Player::X).is_none());
        board.set(pos(0, 3), Cell::Occupied(Player::X));
        let line = bracket(&board, pos(0, 0), Direction::East, Player::X).unwrap();
        assert_eq!(line.flips, vec![pos(0, 1), pos(0, 2)]);
    }

    #[test]
    fn test_occupied_target_has_no_lines() {
        let board = Board::new();
        assert!(capturing_lines(&board, pos(3, 3), Player::O).is_empty());
        assert!(!is_capturing_move(&board, pos(3, 3), Player::O));
    }

    #[test]
    fn test_capturing_lines_match_predicate() {
        let board = Board::new();
        for origin in Position::all() {
            for player in [Player::X, Player::O] {
                assert_eq!(
                    !capturing_lines(&board, origin, player).is_empty(),
                    is_capturing_move(&board, origin, player),
                );
            }
        }
    }
}
