//! Plain text rendering of a grid.
//!
//! Each cell takes three characters between wall posts. Standing walls are drawn with `-` and `|`
//! and the cells of a path are marked with `*`.

use std::collections::HashSet;

use crate::{
    cell::{Position, Side},
    grid::Grid,
};

/// Horizontal wall segment.
const WALL_HORIZONTAL: &str = "---";
/// Vertical wall segment.
const WALL_VERTICAL: char = '|';
/// Wall post drawn at every corner.
const POST: char = '+';
/// Interior of a cell on the path.
const PATH: &str = " * ";
/// Interior of an empty cell, and of a broken horizontal wall.
const EMPTY: &str = "   ";

/// Renders `grid` as text, marking the cells listed in `path`.
#[must_use]
pub fn render(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<&Position> = path.iter().collect();
    let mut out = String::new();

    horizontal_walls(grid, 0, Side::Top, &mut out);
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let position = Position::new(column, row);
            out.push(wall_char(grid, position, Side::Left));
            out.push_str(if on_path.contains(&position) {
                PATH
            } else {
                EMPTY
            });
        }
        let last = Position::new(grid.columns() - 1, row);
        out.push(wall_char(grid, last, Side::Right));
        out.push('\n');

        horizontal_walls(grid, row, Side::Bottom, &mut out);
    }

    out
}

/// Appends the line of `side` walls of every cell in `row`.
fn horizontal_walls(grid: &Grid, row: usize, side: Side, out: &mut String) {
    for column in 0..grid.columns() {
        out.push(POST);
        let standing = grid
            .cell(Position::new(column, row))
            .is_some_and(|cell| cell.has_wall(side));
        out.push_str(if standing { WALL_HORIZONTAL } else { EMPTY });
    }
    out.push(POST);
    out.push('\n');
}

/// Returns the character of the vertical wall on `side` of the cell at `position`.
fn wall_char(grid: &Grid, position: Position, side: Side) -> char {
    if grid
        .cell(position)
        .is_some_and(|cell| cell.has_wall(side))
    {
        WALL_VERTICAL
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::Generator, render::NoopRenderer, solver};

    #[test]
    fn test_render_fresh_grid() {
        let grid = Grid::new(2, 2).expect("grid should be valid");

        assert_eq!(
            render(&grid, &[]),
            "\
+   +---+
|   |   |
+---+---+
|   |   |
+---+   +
"
        );
    }

    #[test]
    fn test_render_solved_corridor() {
        let grid = Grid::new(2, 1).expect("grid should be valid");
        let mut maze = Generator::seeded(1)
            .carve(grid, &mut NoopRenderer)
            .expect("carving should succeed");
        let path = solver::solve(&mut maze, &mut NoopRenderer).expect("corridor should be solvable");

        assert_eq!(
            render(maze.grid(), &path),
            "\
+   +---+
| *   * |
+---+   +
"
        );
    }

    #[test]
    fn test_render_line_count() {
        let grid = Grid::new(5, 4).expect("grid should be valid");

        let text = render(&grid, &[]);

        assert_eq!(text.lines().count(), 9);
        assert!(text.lines().all(|line| line.len() == 21));
    }
}
