//! Error type of the maze core.

use thiserror::Error;

use crate::cell::Position;

/// Errors produced while building or carving a maze.
///
/// None of these are fatal; they are returned to the caller, which decides what to do with them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// One of the grid dimensions is zero.
    #[error("a maze needs at least one column and one row, got {columns}x{rows}")]
    Degenerate {
        /// Requested number of columns.
        columns: usize,
        /// Requested number of rows.
        rows: usize,
    },
    /// The number of cells does not fit in memory addressing.
    #[error("a {columns}x{rows} maze has more cells than can be addressed")]
    TooLarge {
        /// Requested number of columns.
        columns: usize,
        /// Requested number of rows.
        rows: usize,
    },
    /// A position lies outside the grid.
    #[error("position {0} lies outside the grid")]
    OutOfBounds(Position),
    /// Two positions do not share a wall.
    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Position, Position),
    /// A cell has no neighbour to move to while the exit is still unvisited.
    #[error("cell {0} has no neighbours to move to")]
    Isolated(Position),
}
