//! Command-line options and the settings derived from them.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{generator::Completion, render::Layout};

/// Default delay between two animation steps, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 50;

/// Terminal maze carver and solver.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of maze columns.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Number of maze rows.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: u16,

    /// Seed of the maze generator; a random one is drawn when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between animation steps in milliseconds; 0 shows the finished maze straight away.
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,

    /// Offset of the maze from the canvas border, in pixels.
    #[arg(long, default_value_t = 25)]
    pub origin: u16,

    /// Size of one maze cell, in pixels.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_size: u16,

    /// Stop carving as soon as the exit is reached instead of covering the whole grid.
    #[arg(long)]
    pub stop_at_exit: bool,

    /// Print the solved maze as text instead of opening the terminal interface.
    #[arg(long)]
    pub headless: bool,

    /// File receiving the log output of the terminal interface.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// How the program presents its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Animated terminal interface.
    Interactive,
    /// Text output on standard output.
    Headless,
}

/// Validated settings of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of maze columns.
    pub columns: usize,
    /// Number of maze rows.
    pub rows: usize,
    /// Seed of the first maze.
    pub seed: u64,
    /// Delay between animation steps; zero disables pacing.
    pub step_delay: Duration,
    /// Pixel placement handed to the renderer.
    pub layout: Layout,
    /// When carving stops.
    pub completion: Completion,
    /// Output mode.
    pub mode: Mode,
    /// Destination of the log output, if any.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 15,
            rows: 15,
            seed: 0,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            layout: Layout::default(),
            completion: Completion::EveryCell,
            mode: Mode::Interactive,
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the seed following `seed`, used when regenerating.
    #[must_use]
    pub const fn next_seed(seed: u64) -> u64 {
        seed.wrapping_add(1)
    }
}

impl Cli {
    /// Turns the parsed options into run settings, drawing a seed if none was given.
    #[must_use]
    pub fn into_config(self) -> Config {
        let origin = f64::from(self.origin);
        let cell_size = f64::from(self.cell_size);

        Config {
            columns: usize::from(self.columns),
            rows: usize::from(self.rows),
            seed: self.seed.unwrap_or_else(rand::random),
            step_delay: Duration::from_millis(self.delay_ms),
            layout: Layout::new((origin, origin), (cell_size, cell_size)),
            completion: if self.stop_at_exit {
                Completion::Exit
            } else {
                Completion::EveryCell
            },
            mode: if self.headless {
                Mode::Headless
            } else {
                Mode::Interactive
            },
            log_file: self.log_file,
        }
    }
}
