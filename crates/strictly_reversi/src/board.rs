//! The 8x8 Reversi board and its move operations.

use super::action::{Move, MoveError};
use super::error::BoundsError;
use super::rules::capture;
use super::types::{BOARD_SIZE, Cell, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 8x8 Reversi board.
///
/// After construction, cells only change through [`Board::apply_move`],
/// [`Board::play`] and [`Board::flip_captures`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting board: X on (3,3) and (4,4), O on (3,4) and (4,3).
    #[instrument]
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mid = BOARD_SIZE / 2;
        cells[mid - 1][mid - 1] = Cell::Occupied(Player::X);
        cells[mid][mid] = Cell::Occupied(Player::X);
        cells[mid - 1][mid] = Cell::Occupied(Player::O);
        cells[mid][mid - 1] = Cell::Occupied(Player::O);
        Self { cells }
    }

    /// Builds a board from an arbitrary arrangement of cells.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns all cells indexed `[row][col]`.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Gets the cell at a validated position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Gets the cell at raw coordinates, failing loudly when they are off the board.
    #[track_caller]
    pub fn query(&self, row: i32, col: i32) -> Result<Cell, BoundsError> {
        let pos = Position::try_from((row, col))?;
        Ok(self.get(pos))
    }

    /// Overwrites a cell without any rule checks.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Returns true if `player` may place a disc at `(row, col)`.
    ///
    /// Off-board coordinates and occupied cells are never legal; otherwise
    /// the move must bracket at least one opponent run. Never mutates.
    #[instrument(skip(self))]
    pub fn is_legal_move(&self, row: i32, col: i32, player: Player) -> bool {
        Position::new(row, col)
            .is_some_and(|pos| capture::is_capturing_move(self, pos, player))
    }

    /// Checks legality exactly like [`Board::is_legal_move`] and, when legal,
    /// flips every bracketed opponent disc to `player`.
    ///
    /// The target cell itself is left untouched. An illegal move leaves the
    /// board as it was.
    #[instrument(skip(self))]
    pub fn flip_captures(&mut self, row: i32, col: i32, player: Player) -> bool {
        let Some(pos) = Position::new(row, col) else {
            return false;
        };
        let lines = capture::capturing_lines(self, pos, player);
        for flipped in lines.iter().flat_map(|line| &line.flips) {
            self.set(*flipped, Cell::Occupied(player));
        }
        !lines.is_empty()
    }

    /// Places `player`'s disc at `(row, col)` with all captures, if legal.
    ///
    /// Returns false and leaves the board unchanged when the move is illegal.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i32, col: i32, player: Player) -> bool {
        if !self.flip_captures(row, col, player) {
            return false;
        }
        if let Some(pos) = Position::new(row, col) {
            self.set(pos, Cell::Occupied(player));
        }
        true
    }

    /// Applies a move, returning the flipped positions in direction order.
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<Vec<Position>, MoveError> {
        let (pos, player) = (mov.position(), mov.player());
        if !self.get(pos).is_empty() {
            return Err(MoveError::SquareOccupied(pos));
        }
        let flips = self.flips_for(pos, player);
        if flips.is_empty() {
            return Err(MoveError::NoCapture(pos));
        }
        for flipped in &flips {
            self.set(*flipped, Cell::Occupied(player));
        }
        self.set(pos, Cell::Occupied(player));
        debug!(flipped = flips.len(), "Move applied");
        Ok(flips)
    }

    /// Returns the opponent discs `player` would flip by moving at `pos`.
    pub fn flips_for(&self, pos: Position, player: Player) -> Vec<Position> {
        capture::capturing_lines(self, pos, player)
            .into_iter()
            .flat_map(|line| line.flips)
            .collect()
    }

    /// Returns true if `player` has at least one legal move.
    #[instrument(skip(self))]
    pub fn has_legal_move(&self, player: Player) -> bool {
        Position::all().any(|pos| capture::is_capturing_move(self, pos, player))
    }

    /// Returns every legal move for `player` in row-major order.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        Position::all()
            .filter(|pos| capture::is_capturing_move(self, *pos, player))
            .collect()
    }

    /// Number of discs owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_owned_by(player))
            .count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_empty()).count()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
