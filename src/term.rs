use crate::consts::{
    BOARD_BACKGROUND_COLOR, BORDER_COLOR, CELL_COLUMNS, GRID_HEIGHT, GRID_WIDTH, TILE_GLYPH, WINDOW_TITLE,
};
use crate::render::{cell_to_term, Color, Tile};
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Board plus a one character frame around it
pub const BOARD_TERM_SIZE: Coords = (
    GRID_WIDTH as TermInt * CELL_COLUMNS + 2,
    GRID_HEIGHT as TermInt + 2,
);

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let (need_w, need_h) = BOARD_TERM_SIZE;

        if width < need_w || height < need_h {
            bail!("Terminal is {}x{}, the board needs at least {}x{}", width, height, need_w, need_h);
        }

        Ok(TermManager { stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(WINDOW_TITLE))
            .context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error unsetting raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// Every key event that arrived since the last call, without blocking
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling events")? {
            if let Event::Key(ev) = read().context("Error reading event")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))
            .context("Error clearing")?;
        self.draw_borders()
    }

    /// Paints the background, then every tile on top of it
    pub fn draw_frame(&mut self, tiles: &[Tile]) -> Result<()> {
        let blank = " ".repeat((GRID_WIDTH as TermInt * CELL_COLUMNS) as usize);
        queue!(self.stdout, style::SetBackgroundColor(BOARD_BACKGROUND_COLOR.into()))?;
        for y in 0..GRID_HEIGHT as TermInt {
            queue!(self.stdout, cursor::MoveTo(1, y + 1), style::Print(&blank))?;
        }

        for tile in tiles {
            for cell in &tile.cells {
                self.print_tile(cell_to_term(*cell), tile.color)?;
            }
        }

        queue!(self.stdout, style::ResetColor)?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = BOARD_TERM_SIZE;
        let end_x = width - 1;
        let end_y = height - 1;

        queue!(self.stdout, style::SetForegroundColor(BORDER_COLOR.into()))?;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        queue!(self.stdout, style::ResetColor)?;
        self.flush()
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn print_tile(&mut self, pos: Coords, fill: Color) -> Result<()> {
        // The glyph plays the part of the cell outline
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(BORDER_COLOR.into()),
            style::SetBackgroundColor(fill.into()),
            style::Print(TILE_GLYPH)
        )?;
        Ok(())
    }
}
