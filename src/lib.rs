//! Perfect maze carving and depth-first solving, with an animated terminal replay.
//!
//! A [`Grid`](grid::Grid) of walled cells is carved into a [`Maze`](maze::Maze) by a randomized
//! depth-first walk ([`generator`]), which is then searched from the entrance in the top-left
//! corner to the exit in the bottom-right corner by a backtracking depth-first search
//! ([`solver`]). Both algorithms report every step to a [`Renderer`](render::Renderer), which is
//! how the terminal interface replays them and how [`ascii`] output stays free of any drawing.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
pub mod ascii;
pub mod cell;
pub mod config;
pub mod error;
mod events;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod render;
pub mod solver;
mod types;
mod ui;

pub use app::{run_headless, App};
