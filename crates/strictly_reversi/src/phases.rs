//! Game-phase vocabulary: outcomes, finish reasons and the end-of-game policy.

use super::rules::Score;
use super::Player;
use serde::{Deserialize, Serialize};

/// What happens when the player to move has no legal move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EndPolicy {
    /// The blocked player passes; the game ends only when neither side can move.
    #[default]
    PassTurn,
    /// The game ends as soon as the player to move has no legal move.
    StopOnFirstBlocked,
}

/// Why a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// Every cell is occupied.
    BoardFull,
    /// Neither player has a legal move.
    BothBlocked,
    /// The given player had no legal move under [`EndPolicy::StopOnFirstBlocked`].
    Blocked(Player),
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishReason::BoardFull => write!(f, "The board is full"),
            FinishReason::BothBlocked => write!(f, "Neither player can move"),
            FinishReason::Blocked(player) => write!(f, "No more moves available for {}", player),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Decides the outcome from the final disc count.
    pub fn from_score(score: &Score) -> Self {
        score.leader().map_or(Outcome::Draw, Outcome::Winner)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
