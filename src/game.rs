use std::{thread::sleep, time::{Duration, Instant}};

use crate::consts::TICK_INTERVAL;
use crate::input::{map_key, Input};
use crate::state::{GameState, TickOutcome};
use crate::term::TermManager;

use anyhow::Result;
use log::info;

pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    clock: FrameClock,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        Ok(SnakeGame {
            term: TermManager::new()?,
            state: GameState::new(),
            clock: FrameClock::new(TICK_INTERVAL),
        })
    }

    /// Runs until the player quits. The terminal is given back in its
    /// original state whatever the way out.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let res = self.play();
        let restored = self.term.restore();
        res.and(restored)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play(&mut self) -> Result<()> {
        self.term.clear()?;

        loop {
            let inputs: Vec<Input> = self.term.read_key_events_queue()?
                .iter()
                .filter_map(map_key)
                .collect();

            match self.state.tick(&inputs) {
                TickOutcome::Continue => {},
                TickOutcome::GameOver => {
                    info!("Game over, score: {}", self.state.score());
                    self.state.reset();
                    self.term.clear()?;
                },
                TickOutcome::QuitRequested => {
                    info!("Quit with score {}", self.state.score());
                    return Ok(());
                },
            }

            self.term.draw_frame(&self.state.tiles())?;
            self.clock.tick();
        }
    }
}

/// Keeps the loop at a fixed rate by sleeping off what is left of each interval
pub struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        FrameClock { interval, last: Instant::now() }
    }

    /// Blocks until one interval has passed since the previous call, and
    /// returns how long it slept
    pub fn tick(&mut self) -> Duration {
        let wait = self.interval.saturating_sub(self.last.elapsed());
        if !wait.is_zero() {
            sleep(wait);
        }
        self.last = Instant::now();
        wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_waits_out_interval() {
        let mut clock = FrameClock::new(Duration::from_millis(30));
        let start = Instant::now();
        clock.tick();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn test_clock_does_not_wait_when_late() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), Duration::ZERO);
    }
}
