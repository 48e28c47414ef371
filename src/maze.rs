//! Carved maze.

use crate::grid::Grid;

/// A grid that has been through the generator.
///
/// Only [`Generator::carve`](crate::generator::Generator::carve) builds values of this type, which
/// is what lets the solver trust that it is looking at a finished maze. Walls can no longer be
/// changed; only the exploration marks move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// The carved grid.
    grid: Grid,
    /// Seed of the random source, when the generator was built from one.
    seed: Option<u64>,
}

impl Maze {
    /// Wraps a carved grid, clearing the exploration marks left behind by the generator.
    pub(crate) fn new(mut grid: Grid, seed: Option<u64>) -> Self {
        grid.reset_visited();

        Self { grid, seed }
    }

    /// Returns the carved grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid so the solver can move the exploration marks.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the seed the maze was carved with, if known.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Position;

    #[test]
    fn test_maze_new_resets_visited_marks() {
        let mut grid = Grid::new(2, 2).expect("2x2 grid should be valid");
        grid.mark_visited(Position::new(1, 1))
            .expect("position should be inside the grid");

        let maze = Maze::new(grid, Some(7));

        assert!(maze.grid().cells().all(|cell| !cell.is_visited()));
        assert_eq!(maze.seed(), Some(7));
    }
}
