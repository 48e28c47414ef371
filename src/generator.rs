//! Randomized depth-first wall carving.
//!
//! The generator walks the grid from the entrance, breaking the wall towards a random unvisited
//! neighbour at every step. When it reaches a dead end it jumps to a random neighbour, visited or
//! not, without breaking anything, and keeps walking from there. Every carve joins a visited cell
//! to an unvisited one, so the passages always form a tree; walking until every cell has been
//! visited makes that tree span the whole grid.

use rand::{rngs::StdRng, seq::SliceRandom as _, Rng, SeedableRng as _};
use tracing::{debug, info};

use crate::{
    cell::Position,
    error::MazeError,
    grid::Grid,
    maze::Maze,
    render::{self, Renderer},
};

/// Condition that ends the carving walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Completion {
    /// Walk until every cell has been visited, which yields a perfect maze.
    #[default]
    EveryCell,
    /// Stop as soon as the exit has been visited. Cells the walk never reached keep all of their
    /// walls, so the result is a tree rooted at the entrance that may not cover the grid.
    Exit,
}

impl Completion {
    /// Returns whether the walk is over.
    fn is_reached(self, grid: &Grid, unvisited: usize) -> bool {
        match self {
            Self::EveryCell => unvisited == 0,
            Self::Exit => grid.is_visited(grid.exit()),
        }
    }
}

/// Maze generator driven by an injected random source.
#[derive(Clone, Debug)]
pub struct Generator<R> {
    /// Source of every random choice made while carving.
    rng: R,
    /// Seed of `rng`, when it was built from one.
    seed: Option<u64>,
    /// When the walk stops.
    completion: Completion,
}

impl Generator<StdRng> {
    /// Creates a generator whose choices are fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            completion: Completion::EveryCell,
        }
    }

    /// Creates a generator from a freshly drawn seed, which stays available through the carved
    /// maze.
    #[must_use]
    pub fn random() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator around an arbitrary random source.
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            seed: None,
            completion: Completion::EveryCell,
        }
    }

    /// Sets the condition that ends the walk.
    #[must_use]
    pub const fn with_completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    /// Carves `grid` into a perfect maze, reporting every redrawn cell to `renderer`.
    ///
    /// The walk starts at the entrance and stops once its [`Completion`] condition holds; by
    /// default that is when every cell has been visited, and the exit with it. The returned maze
    /// has its exploration marks cleared.
    ///
    /// # Errors
    ///
    /// - [`MazeError::Isolated`] if the walk ever stands on a cell without neighbours before it is
    ///   finished.
    pub fn carve<P: Renderer + ?Sized>(
        &mut self,
        mut grid: Grid,
        renderer: &mut P,
    ) -> Result<Maze, MazeError> {
        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            seed = ?self.seed,
            completion = ?self.completion,
            "carving maze"
        );

        let mut current = grid.entrance();
        grid.mark_visited(current)?;
        let mut unvisited = grid.cells().filter(|cell| !cell.is_visited()).count();

        let mut passages = 0_usize;
        let mut jumps = 0_usize;
        while !self.completion.is_reached(&grid, unvisited) {
            let neighbours = grid.neighbours(current);
            let candidates: Vec<Position> = neighbours
                .iter()
                .copied()
                .filter(|neighbour| !grid.is_visited(*neighbour))
                .collect();

            if let Some(&next) = candidates.choose(&mut self.rng) {
                grid.carve(current, next)?;
                repaint(&grid, current, renderer);
                repaint(&grid, next, renderer);

                current = next;
                grid.mark_visited(current)?;
                unvisited -= 1;
                passages += 1;
            } else {
                // Dead end: hop over without carving.
                repaint(&grid, current, renderer);
                current = *neighbours
                    .choose(&mut self.rng)
                    .ok_or(MazeError::Isolated(current))?;
                jumps += 1;
            }
        }

        info!(passages, jumps, "maze carved");

        Ok(Maze::new(grid, self.seed))
    }
}

/// Redraws the cell at `position`, if there is one.
fn repaint<P: Renderer + ?Sized>(grid: &Grid, position: Position, renderer: &mut P) {
    if let Some(cell) = grid.cell(position) {
        render::paint_cell(renderer, cell);
    }
}
