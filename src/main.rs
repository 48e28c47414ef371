//! This crate contains the source code for the binary of the maze carver mazetuine.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazetuine::{
    config::{Cli, Mode},
    logging, run_headless, App,
};

fn main() -> Result<()> {
    install()?;

    let config = Cli::parse().into_config();
    logging::init(&config)?;

    match config.mode {
        Mode::Headless => {
            print!("{}", run_headless(&config)?);
        }
        Mode::Interactive => {
            let mut terminal = ratatui::init();
            let result = App::new(config).run(&mut terminal);
            ratatui::restore();
            result?;
        }
    }

    Ok(())
}
