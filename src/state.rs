//! The whole game, minus the screen and the keyboard.
//!
//! One call to [`GameState::tick`] is one step of the snake: queued turns are
//! applied, the snake moves, and the outcome tells the caller whether to keep
//! going, start over or stop.

use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::apple::Apple;
use crate::consts::{APPLE_COLOR, INITIAL_DIRECTION, SNAKE_COLOR, START_CELL};
use crate::input::Input;
use crate::render::Tile;
use crate::snake::{MoveResult, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The snake ran into itself, or there is no room left for an apple
    GameOver,
    QuitRequested,
}

pub struct GameState {
    snake: Snake,
    apple: Apple,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same apples every time for the same seed
    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::new(START_CELL, INITIAL_DIRECTION);
        let apple = Apple::spawn(&snake, &mut rng).expect("a single cell snake leaves room for an apple");
        GameState { snake, apple, rng }
    }

    /// Apples eaten since the last reset
    pub fn score(&self) -> usize {
        self.snake.length() - 1
    }

    pub fn tick(&mut self, inputs: &[Input]) -> TickOutcome {
        for input in inputs {
            match *input {
                Input::Quit => return TickOutcome::QuitRequested,
                Input::Turn(dir) => self.snake.set_direction(dir),
            }
        }

        self.step()
    }

    fn step(&mut self) -> TickOutcome {
        // Growing before the move keeps the tail in place on this very step
        let eats = self.snake.next_head() == self.apple.cell();
        if eats {
            self.snake.grow();
        }

        match self.snake.move_step() {
            MoveResult::Crashed => TickOutcome::GameOver,
            MoveResult::Moved { new_head, old_tail } => {
                debug!("Head moved to {:?}, freed {:?}", new_head, old_tail);
                if eats && !self.apple.relocate(&self.snake, &mut self.rng) {
                    warn!("The snake fills the board, no room for another apple");
                    return TickOutcome::GameOver;
                }
                TickOutcome::Continue
            }
        }
    }

    /// Back to a one cell snake at the start. The apple stays unless it would
    /// end up under the new snake.
    pub fn reset(&mut self) {
        self.snake.reset();

        if self.snake.occupies(&self.apple.cell()) {
            self.apple.relocate(&self.snake, &mut self.rng);
        }
    }

    pub fn tiles(&self) -> Vec<Tile> {
        vec![
            Tile::new(self.snake.positions().iter().copied().collect(), SNAKE_COLOR),
            Tile::new(vec![self.apple.cell()], APPLE_COLOR),
        ]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Cell, Direction::*};
    use rand::Rng;

    const FAR_AWAY: Cell = Cell::new(20, 20);

    fn pixels(state: &GameState) -> Vec<(i32, i32)> {
        state.snake.positions().iter().map(|c| c.to_pixels()).collect()
    }

    fn assert_apple_free(state: &GameState) {
        assert!(!state.snake.occupies(&state.apple.cell()));
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::with_seed(3);
        assert_eq!(pixels(&state), vec![(100, 100)]);
        assert_eq!(state.snake.get_direction(), Right);
        assert_eq!(state.snake.length(), 1);
        assert_eq!(state.score(), 0);
        assert_apple_free(&state);
    }

    #[test]
    fn test_initial_apple_never_on_snake() {
        for seed in 0..200 {
            assert_apple_free(&GameState::with_seed(seed));
        }
    }

    #[test]
    fn test_single_step() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(FAR_AWAY);

        assert_eq!(state.tick(&[]), TickOutcome::Continue);
        assert_eq!(pixels(&state), vec![(120, 100)]);
        assert_eq!(state.snake.length(), 1);
        assert_eq!(state.apple.cell(), FAR_AWAY);
    }

    #[test]
    fn test_eating() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(Cell::new(6, 5));

        assert_eq!(state.tick(&[]), TickOutcome::Continue);
        assert_eq!(pixels(&state), vec![(120, 100), (100, 100)]);
        assert_eq!(state.snake.length(), 2);
        assert_eq!(state.score(), 1);
        assert_ne!(state.apple.cell(), Cell::new(6, 5));
        assert_apple_free(&state);

        // The grown snake keeps its length from now on
        state.apple = Apple::at(FAR_AWAY);
        state.tick(&[]);
        assert_eq!(pixels(&state), vec![(140, 100), (120, 100)]);
    }

    #[test]
    fn test_reversal_rejected() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(FAR_AWAY);

        state.tick(&[Input::Turn(Left)]);
        assert_eq!(state.snake.get_direction(), Right);
        assert_eq!(state.snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(FAR_AWAY);

        state.tick(&[Input::Turn(Up), Input::Turn(Down)]);
        assert_eq!(state.snake.get_direction(), Down);
        assert_eq!(state.snake.head(), Cell::new(5, 6));
        assert_eq!(state.snake.pending_direction(), None);
    }

    #[test]
    fn test_quit() {
        let mut state = GameState::with_seed(0);
        assert_eq!(state.tick(&[Input::Turn(Down), Input::Quit]), TickOutcome::QuitRequested);
        assert_eq!(state.snake.head(), START_CELL);
    }

    #[test]
    fn test_collision_then_reset() {
        let mut state = GameState::with_seed(0);
        // Facing right with the body lying to the right of the head
        state.snake = Snake::from_positions(
            vec![Cell::new(5, 5), Cell::new(6, 5), Cell::new(7, 5), Cell::new(8, 5)],
            Right,
        );
        state.apple = Apple::at(FAR_AWAY);

        assert_eq!(state.tick(&[]), TickOutcome::GameOver);
        state.reset();

        assert_eq!(pixels(&state), vec![(100, 100)]);
        assert_eq!(state.snake.get_direction(), Right);
        assert_eq!(state.snake.length(), 1);
        assert_eq!(state.snake.pending_direction(), None);
        assert_eq!(state.apple.cell(), FAR_AWAY);

        assert_eq!(state.tick(&[]), TickOutcome::Continue);
    }

    #[test]
    fn test_steering_into_body_is_game_over_once() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(FAR_AWAY);
        for _ in 0..4 {
            state.snake.grow();
        }
        for _ in 0..4 {
            assert_eq!(state.tick(&[]), TickOutcome::Continue);
        }

        // Head at (9,5), body trailing left. Down, left, up lands on (8,5)
        assert_eq!(state.tick(&[Input::Turn(Down)]), TickOutcome::Continue);
        assert_eq!(state.tick(&[Input::Turn(Left)]), TickOutcome::Continue);
        assert_eq!(state.tick(&[Input::Turn(Up)]), TickOutcome::GameOver);

        state.reset();
        assert_eq!(state.tick(&[]), TickOutcome::Continue);
    }

    #[test]
    fn test_reset_moves_apple_off_start() {
        let mut state = GameState::with_seed(5);
        state.snake = Snake::from_positions(vec![Cell::new(9, 9), Cell::new(8, 9)], Right);
        state.apple = Apple::at(Cell::new(9, 9));

        state.reset();
        assert_eq!(state.snake.head(), Cell::new(9, 9));
        assert_ne!(state.apple.cell(), Cell::new(9, 9));
        assert_apple_free(&state);
    }

    #[test]
    fn test_invariants_over_random_play() {
        let mut state = GameState::with_seed(11);
        let mut keys = StdRng::seed_from_u64(12);
        let dirs = [Up, Down, Left, Right];

        for _ in 0..5000 {
            let inputs: Vec<Input> = (0..keys.gen_range(0..3))
                .map(|_| Input::Turn(dirs[keys.gen_range(0..4)]))
                .collect();

            if state.tick(&inputs) == TickOutcome::GameOver {
                state.reset();
            }

            assert_eq!(state.snake.positions().len(), state.snake.length());
            assert_apple_free(&state);
        }
    }

    #[test]
    fn test_tiles() {
        let mut state = GameState::with_seed(0);
        state.apple = Apple::at(FAR_AWAY);

        let tiles = state.tiles();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0], Tile::new(vec![START_CELL], SNAKE_COLOR));
        assert_eq!(tiles[1], Tile::new(vec![FAR_AWAY], APPLE_COLOR));
    }
}
