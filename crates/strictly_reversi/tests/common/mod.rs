//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use strictly_reversi::{BOARD_SIZE, Board, Cell, Player, Position};

/// Builds a board from eight rows of `.`, `X` and `O`.
pub fn board_from(rows: [&str; BOARD_SIZE]) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        let symbols: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(symbols.len(), BOARD_SIZE, "row {} has wrong width", r);
        for (c, symbol) in symbols.into_iter().enumerate() {
            cells[r][c] = match symbol {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '.' => Cell::Empty,
                other => panic!("unexpected symbol {:?}", other),
            };
        }
    }
    Board::from_cells(cells)
}

pub fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col).expect("test coordinate on board")
}
