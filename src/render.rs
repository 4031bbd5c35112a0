use crossterm::style;

use crate::consts::CELL_COLUMNS;
use crate::snake::Cell;
use crate::TermInt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl From<Color> for style::Color {
    fn from(Color(r, g, b): Color) -> Self {
        style::Color::Rgb { r, g, b }
    }
}

/// Everything the screen needs to know about one thing on the board
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub cells: Vec<Cell>,
    pub color: Color,
}

impl Tile {
    pub fn new(cells: Vec<Cell>, color: Color) -> Self {
        Tile { cells, color }
    }
}

/// Terminal position of a cell, leaving room for a one character frame on
/// the top and left
pub fn cell_to_term(cell: Cell) -> (TermInt, TermInt) {
    (1 + cell.x as TermInt * CELL_COLUMNS, 1 + cell.y as TermInt)
}
