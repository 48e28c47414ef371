//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{self, Canvas},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::BACKGROUND,
    cell::Side,
    render::{MoveKind, Point, Segment},
    types::{MainMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the centred, bordered block of a menu and returns one row per item inside it.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(items + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); items.into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Generate" and "Quit", highlighting the
/// currently selected option.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let rows = init_menu(frame, "Main Menu", 2);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in MainMenuItem::ALL.into_iter().zip(rows.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }
}

/// Returns the status line of the replay screen.
fn status(app: &App) -> String {
    let progress = match (&app.maze, &app.solution) {
        (None, _) => "no maze carved yet".to_owned(),
        _ if !app.animation_manager.is_finished() => "searching".to_owned(),
        (Some(_), Some(path)) => format!("path of {} cells", path.len()),
        (Some(_), None) => "no path found".to_owned(),
    };

    format!(
        "seed {} / {}x{} / {progress}",
        app.seed, app.config.columns, app.config.rows
    )
}

/// Collects the coloured lines of the replay drawn so far.
///
/// Walls painted in the background colour are skipped so that broken walls leave a gap.
fn segments(app: &App) -> Vec<(Segment, Color)> {
    let layout = app.config.layout;
    let animation = &app.animation_manager;

    let mut segments: Vec<(Segment, Color)> = animation
        .cells
        .iter()
        .flat_map(|(position, paint)| {
            let bounds = layout.bounds(*position);
            Side::ALL
                .into_iter()
                .map(move |side| (bounds.wall(side), paint.side(side)))
        })
        .filter(|(_, color)| *color != BACKGROUND)
        .collect();

    segments.extend(animation.moves.iter().map(|(from, to, kind)| {
        (
            Segment {
                from: layout.centre(*from),
                to: layout.centre(*to),
            },
            kind.color(),
        )
    }));

    if animation.is_finished() && app.solution.is_some() {
        if let Some(maze) = &app.maze {
            let color = MoveKind::Forward.color();
            segments.push((layout.entrance_marker(maze.grid().entrance()), color));
            segments.push((layout.exit_marker(maze.grid().exit()), color));
        }
    }

    segments
}

/// Flips a pixel point so that rows grow downwards on the canvas.
fn to_canvas(point: Point, height: f64) -> (f64, f64) {
    (point.0, height - point.1)
}

/// Renders the replay screen with the maze canvas, the status line and the key tooltip.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze canvas
        Constraint::Length(1), // Status line
        Constraint::Length(2), // Tooltip block
    ])
    .split(frame.area());

    let maze_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze area from layout")?;
    let status_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get status area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let (width, height) = app
        .config
        .layout
        .extent(app.config.columns, app.config.rows);
    let lines: Vec<canvas::Line> = segments(app)
        .into_iter()
        .map(|(segment, color)| {
            let (x1, y1) = to_canvas(segment.from, height);
            let (x2, y2) = to_canvas(segment.to, height);
            canvas::Line::new(x1, y1, x2, y2, color)
        })
        .collect();

    let maze = Canvas::default()
        .background_color(BACKGROUND)
        .x_bounds([0., width])
        .y_bounds([0., height])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for line in &lines {
                ctx.draw(line);
            }
        });

    frame.render_widget(maze, maze_area);
    frame.render_widget(
        Line::styled(status(app), Style::default().fg(Color::Green)).centered(),
        status_area,
    );

    let tooltip_block = Block::bordered()
        .title("(h) menu / (r) regenerate / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}
