//! Hard-coded configuration of the board, the look and the pace of the game
use std::time::Duration;

use crate::render::Color;
use crate::snake::{Cell, Direction};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Side of one square cell, in pixels
pub const GRID_SIZE: i32 = 20;

pub const GRID_WIDTH: i32 = SCREEN_WIDTH / GRID_SIZE;
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / GRID_SIZE;

/// Ticks per second
pub const SPEED: u64 = 20;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / SPEED);

/// Where the snake starts, and where it comes back to after crashing
pub const START_CELL: Cell = Cell { x: 5, y: 5 };
pub const INITIAL_DIRECTION: Direction = Direction::Right;

pub const BOARD_BACKGROUND_COLOR: Color = Color(0, 0, 0);
pub const BORDER_COLOR: Color = Color(93, 216, 228);
pub const APPLE_COLOR: Color = Color(255, 0, 0);
pub const SNAKE_COLOR: Color = Color(0, 255, 0);

pub const WINDOW_TITLE: &str = "Snake";
pub const LOG_FILE: &str = "snake.log";

/// Terminal characters are about twice as tall as wide, so a cell takes two columns
pub const CELL_COLUMNS: u16 = 2;
pub const TILE_GLYPH: &str = "[]";
