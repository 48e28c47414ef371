//! Depth-first search with backtracking.
//!
//! The search walks from the entrance, always trying neighbours in the fixed left, top, right,
//! bottom order. Each step forward is reported to the renderer as a forward move and each branch
//! abandoned is reported as an undo move back to the cell it came from. The search keeps its own
//! stack of frames, so the depth of the maze is only bounded by memory.

use tracing::{debug, info, trace};

use crate::{
    cell::Position,
    grid::Grid,
    maze::Maze,
    render::{MoveKind, Renderer},
};

/// One level of the search.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Cell this level explores from.
    position: Position,
    /// Index of the next neighbour to try, in enumeration order.
    next: usize,
}

/// Result of stepping into a cell.
enum Entry {
    /// The exit was reached; carries the complete path.
    Found(Vec<Position>),
    /// The cell was marked and a new level was pushed.
    Descended,
}

/// Searches `maze` for a path from its entrance to its exit.
///
/// Returns the cells of the path, entrance and exit included, or [`None`] if the exit cannot be
/// reached. The exploration marks are cleared before the search starts, so a maze can be solved
/// any number of times.
pub fn solve<R: Renderer + ?Sized>(maze: &mut Maze, renderer: &mut R) -> Option<Vec<Position>> {
    let grid = maze.grid_mut();
    grid.reset_visited();
    debug!(
        columns = grid.columns(),
        rows = grid.rows(),
        "solving maze"
    );

    let mut stack = Vec::new();
    let mut forward = 0_usize;
    let mut undone = 0_usize;
    let mut entering = Some(grid.entrance());

    loop {
        if let Some(position) = entering.take() {
            match enter(grid, &mut stack, position, renderer) {
                Some(Entry::Found(path)) => {
                    info!(steps = path.len(), forward, undone, "maze solved");
                    return Some(path);
                }
                Some(Entry::Descended) => {}
                None => break,
            }
        }

        let Some(frame) = stack.last_mut() else {
            break;
        };

        if let Some(next) = next_candidate(grid, frame) {
            trace!(from = %frame.position, to = %next, "forward move");
            renderer.draw_move(frame.position, next, MoveKind::Forward);
            renderer.tick();
            forward += 1;
            entering = Some(next);
        } else if let Some(failed) = stack.pop() {
            if let Some(parent) = stack.last() {
                trace!(from = %failed.position, to = %parent.position, "undo move");
                renderer.draw_move(failed.position, parent.position, MoveKind::Undo);
                renderer.tick();
                undone += 1;
            }
        }
    }

    info!(forward, undone, "maze has no solution");

    None
}

/// Steps into `position`: either finishes the search or pushes a new level onto `stack`.
///
/// Returns [`None`] only if `position` lies outside the grid.
fn enter<R: Renderer + ?Sized>(
    grid: &mut Grid,
    stack: &mut Vec<Frame>,
    position: Position,
    renderer: &mut R,
) -> Option<Entry> {
    renderer.tick();
    let exit = grid.exit();

    if position == exit {
        return Some(Entry::Found(path(stack, [position])));
    }

    grid.mark_visited(position).ok()?;

    // The exit itself is never marked when it is reached through this shortcut.
    if grid.neighbours(position).contains(&exit) && grid.is_unblocked(position, exit) {
        trace!(from = %position, to = %exit, "forward move into exit");
        renderer.draw_move(position, exit, MoveKind::Forward);
        renderer.tick();
        return Some(Entry::Found(path(stack, [position, exit])));
    }

    stack.push(Frame { position, next: 0 });

    Some(Entry::Descended)
}

/// Advances `frame` to its next open, unvisited neighbour.
fn next_candidate(grid: &Grid, frame: &mut Frame) -> Option<Position> {
    let neighbours = grid.neighbours(frame.position);

    while let Some(&neighbour) = neighbours.get(frame.next) {
        frame.next += 1;
        if grid.is_unblocked(frame.position, neighbour) && !grid.is_visited(neighbour) {
            return Some(neighbour);
        }
    }

    None
}

/// Builds the path formed by the positions on `stack` followed by `tail`.
fn path<const N: usize>(stack: &[Frame], tail: [Position; N]) -> Vec<Position> {
    stack
        .iter()
        .map(|frame| frame.position)
        .chain(tail)
        .collect()
}
