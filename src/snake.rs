use std::collections::VecDeque;

use crate::consts::{GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
use Direction::*;
use MoveResult::*;

/// One square of the board, addressed by column and row
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Top-left corner of the cell on a `SCREEN_WIDTH` x `SCREEN_HEIGHT` canvas
    pub fn to_pixels(self) -> (i32, i32) {
        (self.x * GRID_SIZE, self.y * GRID_SIZE)
    }

    /// The neighbouring cell in `direction`. Edges of the board are glued to
    /// the opposite edge, so this never leaves the grid.
    pub fn wrapped_step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell {
            x: (self.x + dx).rem_euclid(GRID_WIDTH),
            y: (self.y + dy).rem_euclid(GRID_HEIGHT),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    Crashed
}

pub struct Snake {
    positions: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    length: usize,
    start: (Cell, Direction),
}

impl Snake {
    pub fn new(pos: Cell, direction: Direction) -> Self {
        Snake {
            positions: VecDeque::from(vec![pos]),
            direction,
            pending_direction: None,
            length: 1,
            start: (pos, direction),
        }
    }

    /// Builds a snake with an arbitrary body, head first. Resetting it still
    /// brings it back to a single cell at the given head.
    #[cfg(test)]
    pub fn from_positions(positions: Vec<Cell>, direction: Direction) -> Self {
        let length = positions.len();
        Snake {
            start: (positions[0], direction),
            positions: positions.into(),
            direction,
            pending_direction: None,
            length,
        }
    }

    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    #[cfg(test)]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn occupies(&self, cell: &Cell) -> bool {
        self.positions.contains(cell)
    }

    /// Queues a turn for the next step. Turning back onto the neck is ignored.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(self.direction) {
            self.pending_direction = Some(new_direction);
        }
    }

    /// Makes the queued turn, if any, the current direction
    pub fn update_direction(&mut self) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }
    }

    /// Where the head lands on the next step, assuming no further turn
    pub fn next_head(&self) -> Cell {
        let dir = self.pending_direction.unwrap_or(self.direction);
        self.head().wrapped_step(dir)
    }

    pub fn move_step(&mut self) -> MoveResult {
        self.update_direction();

        let new_head = self.head().wrapped_step(self.direction);
        self.positions.push_front(new_head);

        let old_tail = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };

        // The tail cell vacated just above no longer counts as occupied
        if self.positions.iter().skip(1).any(|pos| *pos == new_head) {
            Crashed
        } else {
            Moved { new_head, old_tail }
        }
    }

    /// One more segment; the tail stays put on the next step
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self) {
        let (pos, direction) = self.start;
        self.positions.clear();
        self.positions.push_back(pos);
        self.direction = direction;
        self.pending_direction = None;
        self.length = 1;
    }
}
