mod apple;
mod consts;
mod game;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> Result<()> {
    // The screen belongs to the game, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(consts::LOG_FILE).context("Error creating log file")?,
    )
    .context("Error initializing logger")?;

    info!("Starting snake on a {}x{} board", consts::GRID_WIDTH, consts::GRID_HEIGHT);

    let res = game::SnakeGame::new().and_then(|mut game| game.run());
    if let Err(e) = &res {
        error!("{:#}", e);
    }
    res
}
