//! Cell model of the maze grid.
//!
//! This module contains the [`Cell`] structure along with the [`Position`] used to address cells
//! through the grid and the [`Side`] enumeration naming each of the four walls of a cell.

use std::fmt;

use ratatui::style::Color;

use crate::render::CellPaint;

/// Grid coordinates of a cell.
///
/// Cells are addressed only by their column and row through the owning grid; there are no
/// references between cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index, growing to the right.
    pub column: usize,
    /// Row index, growing downwards.
    pub row: usize,
}

impl Position {
    /// Builds a position from a column and a row index.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.column, self.row)
    }
}

/// One of the four walls of a cell.
///
/// The declaration order doubles as the fixed neighbour enumeration order used by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Wall shared with the cell one column to the left.
    Left,
    /// Wall shared with the cell one row above.
    Top,
    /// Wall shared with the cell one column to the right.
    Right,
    /// Wall shared with the cell one row below.
    Bottom,
}

impl Side {
    /// All sides in neighbour enumeration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Returns the side of the neighbouring cell that mirrors this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// Returns the side of `from` that faces `to`, if the two positions are orthogonally adjacent.
    ///
    /// Positions that are equal, diagonal or further apart yield [`None`].
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|side| side.step(from) == Some(to))
    }

    /// Steps once from `position` towards this side.
    ///
    /// Only underflow is caught here; the upper grid bounds are the grid's business.
    #[must_use]
    pub const fn step(self, position: Position) -> Option<Position> {
        match self {
            Self::Left => match position.column.checked_sub(1) {
                Some(column) => Some(Position::new(column, position.row)),
                None => None,
            },
            Self::Top => match position.row.checked_sub(1) {
                Some(row) => Some(Position::new(position.column, row)),
                None => None,
            },
            Self::Right => match position.column.checked_add(1) {
                Some(column) => Some(Position::new(column, position.row)),
                None => None,
            },
            Self::Bottom => match position.row.checked_add(1) {
                Some(row) => Some(Position::new(position.column, row)),
                None => None,
            },
        }
    }
}

/// The four wall flags of a cell, `true` meaning the wall is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag is an independent wall that is broken separately during carving."
)]
pub struct Walls {
    /// Left wall flag.
    pub left: bool,
    /// Top wall flag.
    pub top: bool,
    /// Right wall flag.
    pub right: bool,
    /// Bottom wall flag.
    pub bottom: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }
}

impl Walls {
    /// Returns whether the wall on `side` is present.
    #[must_use]
    pub const fn has(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    /// Removes the wall on `side`.
    pub(crate) fn remove(&mut self, side: Side) {
        match side {
            Side::Left => self.left = false,
            Side::Top => self.top = false,
            Side::Right => self.right = false,
            Side::Bottom => self.bottom = false,
        }
    }
}

/// A single cell of the maze.
///
/// Every wall starts present and the cell starts unvisited. The `visited` flag is an exploration
/// marker reused by both the generator and the solver, with a reset in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Position of the cell inside the grid, fixed at construction.
    position: Position,
    /// Wall configuration of the cell.
    walls: Walls,
    /// Exploration marker.
    visited: bool,
}

impl Cell {
    /// Creates a fully walled, unvisited cell at `position`.
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            walls: Walls::default(),
            visited: false,
        }
    }

    /// Returns the position of the cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the wall configuration of the cell.
    #[must_use]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Returns whether the wall on `side` is present.
    #[must_use]
    pub const fn has_wall(&self, side: Side) -> bool {
        self.walls.has(side)
    }

    /// Returns whether the cell carries the exploration mark.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Breaks the wall on `side`. Callers are responsible for breaking the mirrored wall too.
    pub(crate) fn break_wall(&mut self, side: Side) {
        self.walls.remove(side);
    }

    /// Sets or clears the exploration mark.
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Computes the colours of the four walls: `wall` where a wall stands, `background` where it
    /// has been broken.
    #[must_use]
    pub const fn paint(&self, wall: Color, background: Color) -> CellPaint {
        /// Picks the colour of one side.
        const fn pick(present: bool, wall: Color, background: Color) -> Color {
            if present {
                wall
            } else {
                background
            }
        }

        CellPaint {
            left: pick(self.walls.left, wall, background),
            top: pick(self.walls.top, wall, background),
            right: pick(self.walls.right, wall, background),
            bottom: pick(self.walls.bottom, wall, background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_new_is_walled_and_unvisited() {
        let cell = Cell::new(Position::new(3, 4));

        assert_eq!(cell.position(), Position::new(3, 4));
        for side in Side::ALL {
            assert!(cell.has_wall(side), "fresh cell should have its {side:?} wall");
        }
        assert!(!cell.is_visited(), "fresh cell should be unvisited");
    }

    #[test]
    fn test_break_wall_only_touches_one_side() {
        let mut cell = Cell::new(Position::new(0, 0));
        cell.break_wall(Side::Right);

        assert!(!cell.has_wall(Side::Right));
        assert!(cell.has_wall(Side::Left));
        assert!(cell.has_wall(Side::Top));
        assert!(cell.has_wall(Side::Bottom));
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Bottom.opposite(), Side::Top);
    }

    #[test]
    fn test_side_between_adjacent_positions() {
        let centre = Position::new(1, 1);

        assert_eq!(Side::between(centre, Position::new(0, 1)), Some(Side::Left));
        assert_eq!(Side::between(centre, Position::new(1, 0)), Some(Side::Top));
        assert_eq!(Side::between(centre, Position::new(2, 1)), Some(Side::Right));
        assert_eq!(Side::between(centre, Position::new(1, 2)), Some(Side::Bottom));
    }

    #[test]
    fn test_side_between_rejects_non_adjacent_positions() {
        let centre = Position::new(1, 1);

        assert_eq!(Side::between(centre, centre), None);
        assert_eq!(Side::between(centre, Position::new(2, 2)), None);
        assert_eq!(Side::between(centre, Position::new(3, 1)), None);
        assert_eq!(Side::between(Position::new(usize::MAX, 0), Position::new(0, 0)), None);
    }

    #[test]
    fn test_side_step_stops_at_zero() {
        let origin = Position::new(0, 0);

        assert_eq!(Side::Left.step(origin), None);
        assert_eq!(Side::Top.step(origin), None);
        assert_eq!(Side::Right.step(origin), Some(Position::new(1, 0)));
        assert_eq!(Side::Bottom.step(origin), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_paint_uses_background_for_broken_walls() {
        let mut cell = Cell::new(Position::new(0, 0));
        cell.break_wall(Side::Top);

        let paint = cell.paint(Color::Black, Color::White);

        assert_eq!(paint.top, Color::White);
        assert_eq!(paint.left, Color::Black);
        assert_eq!(paint.right, Color::Black);
        assert_eq!(paint.bottom, Color::Black);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
    }
}
