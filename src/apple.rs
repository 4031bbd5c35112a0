use log::debug;
use rand::{seq::IteratorRandom, Rng};

use crate::consts::{GRID_HEIGHT, GRID_WIDTH};
use crate::snake::{Cell, Snake};

pub struct Apple {
    cell: Cell,
}

impl Apple {
    /// Places a new apple on a random free cell, or `None` if the snake fills
    /// the whole board
    pub fn spawn<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Option<Self> {
        free_cell(snake, rng).map(|cell| Apple { cell })
    }

    #[cfg(test)]
    pub fn at(cell: Cell) -> Self {
        Apple { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves the apple to a random free cell. Returns false, leaving the apple
    /// where it was, if there is none.
    pub fn relocate<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) -> bool {
        match free_cell(snake, rng) {
            Some(cell) => {
                debug!("Apple moved to {:?}, {:?} px", cell, cell.to_pixels());
                self.cell = cell;
                true
            }
            None => false,
        }
    }
}

fn free_cell<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Option<Cell> {
    all_cells().filter(|cell| !snake.occupies(cell)).choose(rng)
}

fn all_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Cell::new(x, y)))
}
