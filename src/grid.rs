//! Rectangular grid of cells.
//!
//! This module contains the [`Grid`] structure, which owns every cell of the maze and answers the
//! topological questions both algorithms rely on: neighbour enumeration, the unblocked test and
//! symmetric wall carving.

use tracing::trace;

use crate::{
    cell::{Cell, Position, Side},
    error::MazeError,
    render::{self, Renderer},
};

/// Rectangular arrangement of cells addressed by column and row.
///
/// The entrance is the top-left cell and the exit the bottom-right one. Cells are stored in
/// column-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns, at least one.
    columns: usize,
    /// Number of rows, at least one.
    rows: usize,
    /// Cell storage, `columns * rows` long.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid with every wall standing and every cell unvisited, except for the top wall of
    /// the entrance and the bottom wall of the exit, which are broken straight away.
    ///
    /// # Errors
    ///
    /// - [`MazeError::Degenerate`] if either dimension is zero.
    /// - [`MazeError::TooLarge`] if the cell count overflows.
    pub fn new(columns: usize, rows: usize) -> Result<Self, MazeError> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::Degenerate { columns, rows });
        }
        let count = columns
            .checked_mul(rows)
            .ok_or(MazeError::TooLarge { columns, rows })?;

        let mut cells = Vec::with_capacity(count);
        for column in 0..columns {
            for row in 0..rows {
                cells.push(Cell::new(Position::new(column, row)));
            }
        }

        let mut grid = Self {
            columns,
            rows,
            cells,
        };
        grid.break_entrance_and_exit();

        Ok(grid)
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the position of the entrance cell.
    #[must_use]
    pub const fn entrance(&self) -> Position {
        Position::new(0, 0)
    }

    /// Returns the position of the exit cell.
    #[must_use]
    pub const fn exit(&self) -> Position {
        Position::new(self.columns - 1, self.rows - 1)
    }

    /// Returns whether `position` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.column < self.columns && position.row < self.rows
    }

    /// Returns the storage index of `position`, or [`None`] if it lies outside the grid.
    const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.column * self.rows + position.row)
        } else {
            None
        }
    }

    /// Returns the cell at `position`, or [`None`] if it lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|index| self.cells.get(index))
    }

    /// Returns the cell at `position` mutably.
    fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, MazeError> {
        self.index(position)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(MazeError::OutOfBounds(position))
    }

    /// Iterates over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Returns the neighbour of `position` across `side`, if it lies inside the grid.
    #[must_use]
    pub fn neighbour(&self, position: Position, side: Side) -> Option<Position> {
        side.step(position)
            .filter(|neighbour| self.contains(*neighbour))
    }

    /// Returns the neighbours of `position` in the fixed order left, top, right, bottom.
    ///
    /// Positions outside the grid have no neighbours.
    #[must_use]
    pub fn neighbours(&self, position: Position) -> Vec<Position> {
        if !self.contains(position) {
            return Vec::new();
        }

        Side::ALL
            .into_iter()
            .filter_map(|side| self.neighbour(position, side))
            .collect()
    }

    /// Returns whether a passage connects `from` and `to`.
    ///
    /// Both positions must lie inside the grid and be orthogonally adjacent, and the walls on both
    /// sides of the shared edge must be broken. Anything else, out of bounds positions included, is
    /// reported as blocked.
    #[must_use]
    pub fn is_unblocked(&self, from: Position, to: Position) -> bool {
        let (Some(source), Some(target)) = (self.cell(from), self.cell(to)) else {
            return false;
        };
        let Some(side) = Side::between(from, to) else {
            return false;
        };

        !source.has_wall(side) && !target.has_wall(side.opposite())
    }

    /// Breaks the wall pair shared by `from` and `to`.
    ///
    /// Both flags are cleared within this call, so the grid never exposes a one-sided break.
    ///
    /// # Errors
    ///
    /// - [`MazeError::OutOfBounds`] if either position lies outside the grid.
    /// - [`MazeError::NotAdjacent`] if the positions do not share a wall.
    pub(crate) fn carve(&mut self, from: Position, to: Position) -> Result<(), MazeError> {
        if !self.contains(from) {
            return Err(MazeError::OutOfBounds(from));
        }
        if !self.contains(to) {
            return Err(MazeError::OutOfBounds(to));
        }
        let side = Side::between(from, to).ok_or(MazeError::NotAdjacent(from, to))?;

        self.cell_mut(from)?.break_wall(side);
        self.cell_mut(to)?.break_wall(side.opposite());
        trace!(%from, %to, "carved passage");

        Ok(())
    }

    /// Returns whether the cell at `position` carries the exploration mark. Positions outside the
    /// grid count as unvisited.
    #[must_use]
    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_visited)
    }

    /// Puts the exploration mark on the cell at `position`.
    pub(crate) fn mark_visited(&mut self, position: Position) -> Result<(), MazeError> {
        self.cell_mut(position)?.set_visited(true);

        Ok(())
    }

    /// Clears the exploration mark of every cell.
    ///
    /// This is the boundary between carving and solving: the flag means "carved into" before the
    /// call and "explored by the search" after it.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    /// Counts the passages of the grid, each shared edge with both walls broken counting once.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Side::Right, Side::Bottom]
                    .into_iter()
                    .filter_map(|side| self.neighbour(cell.position(), side))
                    .filter(|neighbour| self.is_unblocked(cell.position(), *neighbour))
                    .count()
            })
            .sum()
    }

    /// Draws every cell of the grid.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for cell in self.cells() {
            render::paint_cell(renderer, cell);
        }
    }

    /// Breaks the top wall of the entrance and the bottom wall of the exit.
    fn break_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        if let Ok(cell) = self.cell_mut(entrance) {
            cell.break_wall(Side::Top);
        }
        if let Ok(cell) = self.cell_mut(exit) {
            cell.break_wall(Side::Bottom);
        }
    }
}
