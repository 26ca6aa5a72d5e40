//! Disc count invariant: every ply adds exactly one disc.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: occupied cells equal the four starting discs plus plies played.
///
/// Captures only recolour discs, so each accepted move grows the total by one.
pub struct DiscCountInvariant;

impl Invariant<GameInProgress> for DiscCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let occupied = game.board().cells().iter().flatten().filter(|c| !c.is_empty()).count();
        occupied == 4 + game.plies()
    }

    fn description() -> &'static str {
        "Disc count equals starting discs plus plies played"
    }
}
