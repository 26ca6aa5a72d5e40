//! Center invariant: the four starting cells never empty out.

use super::super::{BOARD_SIZE, GameInProgress, Position};
use super::Invariant;

/// Invariant: the four center cells are always occupied.
pub struct CenterOccupiedInvariant;

impl Invariant<GameInProgress> for CenterOccupiedInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mid = (BOARD_SIZE / 2) as i32;
        [(mid - 1, mid - 1), (mid - 1, mid), (mid, mid - 1), (mid, mid)]
            .into_iter()
            .filter_map(|(row, col)| Position::new(row, col))
            .all(|pos| !game.board().get(pos).is_empty())
    }

    fn description() -> &'static str {
        "Center cells are never empty"
    }
}
