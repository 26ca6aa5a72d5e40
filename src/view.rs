//! Console rendering of a board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_reversi::{BOARD_SIZE, Board, Cell, Player};
use tracing::instrument;

/// Symbols used for each cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Glyphs {
    /// Symbol for an empty cell.
    #[serde(default = "default_empty")]
    empty: char,
    /// Symbol for an X disc.
    #[serde(default = "default_x")]
    x: char,
    /// Symbol for an O disc.
    #[serde(default = "default_o")]
    o: char,
}

fn default_empty() -> char {
    '*'
}

fn default_x() -> char {
    'X'
}

fn default_o() -> char {
    'O'
}

impl Glyphs {
    /// Creates a glyph set.
    pub fn new(empty: char, x: char, o: char) -> Self {
        Self { empty, x, o }
    }

    /// Returns the symbol for a cell.
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell.owner() {
            None => self.empty,
            Some(Player::X) => self.x,
            Some(Player::O) => self.o,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(default_empty(), default_x(), default_o())
    }
}

/// Read-only console projection of a [`Board`].
#[derive(Debug, Clone, Copy)]
pub struct ConsoleView<'a> {
    board: &'a Board,
    glyphs: Glyphs,
    coordinates: bool,
}

impl<'a> ConsoleView<'a> {
    /// Creates a view with the default glyphs.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            glyphs: Glyphs::default(),
            coordinates: false,
        }
    }

    /// Uses a custom glyph set.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Prefixes rows and columns with their indices.
    pub fn with_coordinates(mut self, coordinates: bool) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// Renders the grid as one line per row, cells separated by spaces.
    #[instrument(skip(self))]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.coordinates {
            out.push_str("  ");
            let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
            out.push_str(&header.join(" "));
            out.push('\n');
        }
        for (row, cells) in self.board.cells().iter().enumerate() {
            if self.coordinates {
                out.push_str(&format!("{} ", row));
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| self.glyphs.for_cell(*cell).to_string())
                .collect();
            out.push_str(&symbols.join(" "));
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for ConsoleView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_mapping() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.for_cell(Cell::Empty), '*');
        assert_eq!(glyphs.for_cell(Cell::Occupied(Player::X)), 'X');
        assert_eq!(glyphs.for_cell(Cell::Occupied(Player::O)), 'O');
    }

    #[test]
    fn test_render_shape() {
        let board = Board::new();
        let text = ConsoleView::new(&board).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE);
        assert!(lines.iter().all(|line| line.split(' ').count() == BOARD_SIZE));
    }

    #[test]
    fn test_coordinates_header() {
        let board = Board::new();
        let text = ConsoleView::new(&board).with_coordinates(true).render();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("  0 1 2 3 4 5 6 7"));
        assert_eq!(lines.next(), Some("0 * * * * * * * *"));
    }
}
