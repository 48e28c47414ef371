//! Renderer port and pixel geometry.
//!
//! The carving and solving algorithms report their progress through the [`Renderer`] trait and
//! never read anything back from it apart from the background colour. Two implementations ship
//! with the crate: [`NoopRenderer`] for headless runs and [`Recorder`], which keeps every event in
//! order so that the terminal interface can replay them later.
//!
//! [`Layout`] turns grid positions into pixel geometry. Its origin offset and cell size are only
//! meaningful to renderers and have no bearing on the maze itself.

use ratatui::style::Color;

use crate::cell::{Cell, Position, Side};

/// Colour used for walls that are still standing.
pub const WALL_COLOR: Color = Color::Green;

/// Classification of a move between two cell centres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// The solver steps forward into a new cell.
    Forward,
    /// The solver backtracks out of a dead branch.
    Undo,
}

impl MoveKind {
    /// Returns the colour a move of this kind is drawn with.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Forward => Color::Red,
            Self::Undo => Color::Gray,
        }
    }
}

/// Colours of the four walls of a cell as handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPaint {
    /// Colour of the left wall.
    pub left: Color,
    /// Colour of the top wall.
    pub top: Color,
    /// Colour of the right wall.
    pub right: Color,
    /// Colour of the bottom wall.
    pub bottom: Color,
}

impl CellPaint {
    /// Returns the colour of the wall on `side`.
    #[must_use]
    pub const fn side(&self, side: Side) -> Color {
        match side {
            Side::Left => self.left,
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }
}

/// Sink for the visual side effects of carving and solving.
///
/// Implementations must not influence the algorithms in any way; the only value read back is
/// [`Renderer::background`], which merely colours broken walls.
pub trait Renderer {
    /// Draws the current wall configuration of the cell at `position`.
    fn draw_cell(&mut self, position: Position, paint: CellPaint);

    /// Draws a move between the centres of two cells.
    fn draw_move(&mut self, from: Position, to: Position, kind: MoveKind);

    /// Marks a pacing point; interactive renderers redraw here.
    fn tick(&mut self) {}

    /// Returns the colour used to fill broken walls.
    fn background(&self) -> Color {
        Color::Reset
    }
}

/// Renderer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_cell(&mut self, _position: Position, _paint: CellPaint) {}

    fn draw_move(&mut self, _from: Position, _to: Position, _kind: MoveKind) {}
}

/// A single notification received by a [`Recorder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// A cell was (re)drawn with the given wall colours.
    Cell {
        /// Position of the drawn cell.
        position: Position,
        /// Wall colours of the drawn cell.
        paint: CellPaint,
    },
    /// A move between two cell centres was drawn.
    Move {
        /// Cell the move starts from.
        from: Position,
        /// Cell the move ends in.
        to: Position,
        /// Whether the move goes forward or backtracks.
        kind: MoveKind,
    },
    /// A pacing point was reached.
    Tick,
}

/// Renderer that records every event in the order it was received.
#[derive(Clone, Debug)]
pub struct Recorder {
    /// Colour reported through [`Renderer::background`].
    background: Color,
    /// Recorded events.
    events: Vec<RenderEvent>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(Color::Reset)
    }
}

impl Recorder {
    /// Creates an empty recorder reporting `background` as its background colour.
    #[must_use]
    pub const fn new(background: Color) -> Self {
        Self {
            background,
            events: Vec::new(),
        }
    }

    /// Returns the events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }

    /// Returns the recorded moves in order.
    pub fn moves(&self) -> impl Iterator<Item = (Position, Position, MoveKind)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            RenderEvent::Move { from, to, kind } => Some((from, to, kind)),
            RenderEvent::Cell { .. } | RenderEvent::Tick => None,
        })
    }
}

impl Renderer for Recorder {
    fn draw_cell(&mut self, position: Position, paint: CellPaint) {
        self.events.push(RenderEvent::Cell { position, paint });
    }

    fn draw_move(&mut self, from: Position, to: Position, kind: MoveKind) {
        self.events.push(RenderEvent::Move { from, to, kind });
    }

    fn tick(&mut self) {
        self.events.push(RenderEvent::Tick);
    }

    fn background(&self) -> Color {
        self.background
    }
}

/// Draws `cell` with the standard wall colour and follows up with a pacing tick.
pub(crate) fn paint_cell<R: Renderer + ?Sized>(renderer: &mut R, cell: &Cell) {
    let paint = cell.paint(WALL_COLOR, renderer.background());
    renderer.draw_cell(cell.position(), paint);
    renderer.tick();
}

/// A point in pixel space.
pub type Point = (f64, f64);

/// A straight line between two pixel points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Start of the line.
    pub from: Point,
    /// End of the line.
    pub to: Point,
}

/// Pixel rectangle occupied by a cell, given by two opposite corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Horizontal coordinate of the first corner.
    pub x1: f64,
    /// Vertical coordinate of the first corner.
    pub y1: f64,
    /// Horizontal coordinate of the opposite corner.
    pub x2: f64,
    /// Vertical coordinate of the opposite corner.
    pub y2: f64,
}

impl Bounds {
    /// Returns the centre of the rectangle; the order of the corners does not matter.
    #[must_use]
    pub fn centre(&self) -> Point {
        ((self.x1 + self.x2) / 2., (self.y1 + self.y2) / 2.)
    }

    /// Returns the line along the wall on `side`.
    #[must_use]
    pub const fn wall(&self, side: Side) -> Segment {
        let (from, to) = match side {
            Side::Left => ((self.x1, self.y1), (self.x1, self.y2)),
            Side::Top => ((self.x1, self.y1), (self.x2, self.y1)),
            Side::Right => ((self.x2, self.y1), (self.x2, self.y2)),
            Side::Bottom => ((self.x1, self.y2), (self.x2, self.y2)),
        };

        Segment { from, to }
    }
}

/// Pixel placement of the grid: the offset of its top-left corner and the size of one cell.
///
/// Vertical coordinates grow downwards, like rows do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Horizontal offset of the grid.
    pub origin_x: f64,
    /// Vertical offset of the grid.
    pub origin_y: f64,
    /// Width of one cell.
    pub cell_width: f64,
    /// Height of one cell.
    pub cell_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new((25., 25.), (50., 50.))
    }
}

impl Layout {
    /// Creates a layout from an origin offset and a cell size.
    #[must_use]
    pub const fn new(origin: Point, cell_size: Point) -> Self {
        Self {
            origin_x: origin.0,
            origin_y: origin.1,
            cell_width: cell_size.0,
            cell_height: cell_size.1,
        }
    }

    /// Returns the pixel rectangle of the cell at `position`.
    #[must_use]
    pub fn bounds(&self, position: Position) -> Bounds {
        let x1 = self.origin_x + position.column as f64 * self.cell_width;
        let y1 = self.origin_y + position.row as f64 * self.cell_height;

        Bounds {
            x1,
            y1,
            x2: x1 + self.cell_width,
            y2: y1 + self.cell_height,
        }
    }

    /// Returns the centre of the cell at `position`.
    #[must_use]
    pub fn centre(&self, position: Position) -> Point {
        self.bounds(position).centre()
    }

    /// Returns the line of the move marker leading into the entrance from above.
    #[must_use]
    pub fn entrance_marker(&self, entrance: Position) -> Segment {
        let (x, y) = self.centre(entrance);

        Segment {
            from: (x, y - self.origin_y),
            to: (x, y),
        }
    }

    /// Returns the line of the move marker leaving the exit downwards.
    #[must_use]
    pub fn exit_marker(&self, exit: Position) -> Segment {
        let (x, y) = self.centre(exit);

        Segment {
            from: (x, y),
            to: (x, y + self.origin_y),
        }
    }

    /// Returns the total pixel size of a grid with the given dimensions, margins included.
    #[must_use]
    pub fn extent(&self, columns: usize, rows: usize) -> Point {
        (
            2. * self.origin_x + columns as f64 * self.cell_width,
            2. * self.origin_y + rows as f64 * self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_kind_colors() {
        assert_eq!(MoveKind::Forward.color(), Color::Red);
        assert_eq!(MoveKind::Undo.color(), Color::Gray);
    }

    #[test]
    fn test_recorder_keeps_event_order() {
        let mut recorder = Recorder::new(Color::Black);
        let paint = Cell::new(Position::new(0, 0)).paint(WALL_COLOR, Color::Black);

        recorder.draw_cell(Position::new(0, 0), paint);
        recorder.tick();
        recorder.draw_move(Position::new(0, 0), Position::new(1, 0), MoveKind::Forward);
        recorder.draw_move(Position::new(1, 0), Position::new(0, 0), MoveKind::Undo);

        assert_eq!(recorder.background(), Color::Black);
        assert_eq!(recorder.events().len(), 4);
        assert_eq!(
            recorder.events().first(),
            Some(&RenderEvent::Cell {
                position: Position::new(0, 0),
                paint
            })
        );
        assert_eq!(recorder.events().get(1), Some(&RenderEvent::Tick));

        let moves: Vec<_> = recorder.moves().collect();
        assert_eq!(
            moves,
            vec![
                (Position::new(0, 0), Position::new(1, 0), MoveKind::Forward),
                (Position::new(1, 0), Position::new(0, 0), MoveKind::Undo),
            ]
        );
    }

    #[test]
    fn test_paint_cell_uses_renderer_background() {
        let mut recorder = Recorder::new(Color::White);
        let mut cell = Cell::new(Position::new(2, 1));
        cell.break_wall(Side::Bottom);

        paint_cell(&mut recorder, &cell);

        let Some(RenderEvent::Cell { position, paint }) = recorder.events().first().copied() else {
            panic!("first event should be a cell draw");
        };
        assert_eq!(position, Position::new(2, 1));
        assert_eq!(paint.side(Side::Bottom), Color::White);
        assert_eq!(paint.side(Side::Top), WALL_COLOR);
        assert_eq!(recorder.events().get(1), Some(&RenderEvent::Tick));
    }

    #[test]
    fn test_noop_renderer_accepts_everything() {
        let mut renderer = NoopRenderer;
        let paint = Cell::new(Position::new(0, 0)).paint(WALL_COLOR, renderer.background());

        renderer.draw_cell(Position::new(0, 0), paint);
        renderer.draw_move(Position::new(0, 0), Position::new(0, 1), MoveKind::Forward);
        renderer.tick();

        assert_eq!(renderer.background(), Color::Reset);
    }

    #[test]
    fn test_layout_bounds_follow_origin_and_cell_size() {
        let layout = Layout::new((9., 8.), (11., 13.));

        assert_eq!(
            layout.bounds(Position::new(2, 3)),
            Bounds {
                x1: 31.,
                y1: 47.,
                x2: 42.,
                y2: 60.,
            }
        );
    }

    #[test]
    fn test_bounds_walls() {
        let bounds = Bounds {
            x1: 0.,
            y1: 0.,
            x2: 10.,
            y2: 10.,
        };

        assert_eq!(
            bounds.wall(Side::Left),
            Segment {
                from: (0., 0.),
                to: (0., 10.)
            }
        );
        assert_eq!(
            bounds.wall(Side::Top),
            Segment {
                from: (0., 0.),
                to: (10., 0.)
            }
        );
        assert_eq!(
            bounds.wall(Side::Right),
            Segment {
                from: (10., 0.),
                to: (10., 10.)
            }
        );
        assert_eq!(
            bounds.wall(Side::Bottom),
            Segment {
                from: (0., 10.),
                to: (10., 10.)
            }
        );
    }

    #[test]
    fn test_bounds_centre_ignores_corner_order() {
        let forward = Bounds {
            x1: 0.,
            y1: 0.,
            x2: 10.,
            y2: 10.,
        };
        let reversed = Bounds {
            x1: 10.,
            y1: 10.,
            x2: 0.,
            y2: 0.,
        };
        let offset = Bounds {
            x1: 10.,
            y1: 30.,
            x2: 25.,
            y2: 45.,
        };

        assert_eq!(forward.centre(), (5., 5.));
        assert_eq!(reversed.centre(), (5., 5.));
        assert_eq!(offset.centre(), (17.5, 37.5));
    }

    #[test]
    fn test_layout_markers() {
        let layout = Layout::default();

        assert_eq!(
            layout.entrance_marker(Position::new(0, 0)),
            Segment {
                from: (50., 25.),
                to: (50., 50.)
            }
        );
        assert_eq!(
            layout.exit_marker(Position::new(1, 1)),
            Segment {
                from: (100., 100.),
                to: (100., 125.)
            }
        );
    }

    #[test]
    fn test_layout_extent() {
        let layout = Layout::default();

        assert_eq!(layout.extent(15, 10), (800., 550.));
    }
}
