//! Board coordinates and compass directions.

use super::error::BoundsError;
use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A validated coordinate on the board.
///
/// Both components are always in `0..BOARD_SIZE`; out-of-range pairs are
/// rejected at construction and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position if both components are on the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row index (0 is the top row).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 is the leftmost column).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the neighbouring position one step in `direction`, if on the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Iterates every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = BoundsError;

    #[track_caller]
    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        match Self::new(row, col) {
            Some(pos) => Ok(pos),
            None => Err(BoundsError::new(row, col)),
        }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (pos.row as i32, pos.col as i32)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns true if `(row, col)` lies on the board.
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Parses "row col" (whitespace or comma separated) into raw coordinates.
///
/// Range is not checked, so `"9 9"` parses and callers decide how to reject it.
#[instrument]
pub fn parse_coordinates(s: &str) -> Option<(i32, i32)> {
    let mut parts = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse::<i32>().ok()?;
    let col = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// One of the eight compass directions a capture can travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Up and to the left.
    NorthWest,
    /// Up.
    North,
    /// Up and to the right.
    NorthEast,
    /// Left.
    West,
    /// Right.
    East,
    /// Down and to the left.
    SouthWest,
    /// Down.
    South,
    /// Down and to the right.
    SouthEast,
}

impl Direction {
    /// Unit step as `(d_row, d_col)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Iterates all eight directions.
    pub fn all() -> impl Iterator<Item = Direction> {
        <Direction as strum::IntoEnumIterator>::iter()
    }
}
