//! Core application state and logic for the maze replay.

use std::fmt::Write as _;

use color_eyre::eyre::Result;
use ratatui::{style::Color, DefaultTerminal};
use tracing::info;

use crate::{
    animation::AnimationManager,
    ascii,
    cell::Position,
    config::Config,
    events,
    generator::Generator,
    grid::Grid,
    maze::Maze,
    render::{NoopRenderer, Recorder, Renderer},
    solver,
    types::{MainMenuItem, Screen},
    ui,
};

/// Background colour of the canvas, used for broken walls.
pub(crate) const BACKGROUND: Color = Color::Black;

/// Application state container for the maze replay.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field is used to determine which screen to render and what actions to take based on
    /// user input.
    pub(crate) screen: Screen,
    /// Settings the application was started with.
    ///
    /// This field provides the maze dimensions, the completion rule, the pixel layout and the replay
    /// pacing every time a maze is carved.
    pub(crate) config: Config,
    /// Seed of the maze currently on screen, or of the next one to be carved.
    ///
    /// This field starts off with the configured seed and moves on to the next seed every time the
    /// user regenerates the maze.
    pub(crate) seed: u64,
    /// Maze currently on screen.
    ///
    /// This field is `None` until the first maze is carved from the main menu.
    pub(crate) maze: Option<Maze>,
    /// Path found through the current maze.
    ///
    /// This field is `None` both before the first maze is carved and when the search failed.
    pub(crate) solution: Option<Vec<Position>>,
    /// Animation manager replaying the carve and the search.
    ///
    /// This field holds the recorded events of the current maze and what has been drawn of them so
    /// far.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates a new instance of the App structure from the run settings.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Generate),
            seed: config.seed,
            animation_manager: AnimationManager::new(config.step_delay),
            maze: None,
            solution: None,
            config,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    /// - [`crate::error::MazeError`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(|err| std::io::Error::other(err.to_string()))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Carves and solves a maze with the current seed and loads the recording into the animation.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions cannot form a grid.
    pub(crate) fn generate(&mut self) -> Result<()> {
        let mut recorder = Recorder::new(BACKGROUND);
        let (maze, solution) = carve_and_solve(&self.config, self.seed, &mut recorder)?;

        self.animation_manager.load(recorder.into_events());
        self.maze = Some(maze);
        self.solution = solution;

        Ok(())
    }

    /// Moves on to the next seed and carves a new maze with it.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions cannot form a grid.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        self.seed = Config::next_seed(self.seed);
        self.generate()
    }
}

/// Builds, carves and solves a maze, reporting everything to `renderer`.
fn carve_and_solve<R: Renderer + ?Sized>(
    config: &Config,
    seed: u64,
    renderer: &mut R,
) -> Result<(Maze, Option<Vec<Position>>)> {
    let grid = Grid::new(config.columns, config.rows)?;
    grid.draw(renderer);

    let mut maze = Generator::seeded(seed)
        .with_completion(config.completion)
        .carve(grid, renderer)?;
    let solution = solver::solve(&mut maze, renderer);
    info!(seed, solved = solution.is_some(), "maze ready");

    Ok((maze, solution))
}

/// Carves and solves a maze without any animation and renders the result as text.
///
/// # Errors
///
/// This function may return errors if the configured dimensions cannot form a grid.
pub fn run_headless(config: &Config) -> Result<String> {
    let (maze, solution) = carve_and_solve(config, config.seed, &mut NoopRenderer)?;
    let path = solution.as_deref().unwrap_or_default();

    let mut out = ascii::render(maze.grid(), path);
    match &solution {
        Some(path) => writeln!(
            out,
            "seed {}, {}x{}: path of {} cells",
            config.seed,
            config.columns,
            config.rows,
            path.len()
        )?,
        None => writeln!(
            out,
            "seed {}, {}x{}: no path found",
            config.seed, config.columns, config.rows
        )?,
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Builds settings for a small, unpaced maze.
    fn create_test_config() -> Config {
        Config {
            columns: 5,
            rows: 4,
            seed: 12,
            step_delay: Duration::ZERO,
            ..Config::default()
        }
    }

    #[test]
    fn test_app_new_starts_on_main_menu() {
        let app = App::new(create_test_config());

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Generate));
        assert_eq!(app.seed, 12);
        assert!(app.maze.is_none());
    }

    #[test]
    fn test_generate_loads_finished_replay() {
        let mut app = App::new(create_test_config());

        app.generate().expect("generation should succeed");

        assert!(app.maze.is_some());
        let path = app.solution.as_ref().expect("generated maze should be solvable");
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(4, 3)));
        assert!(app.animation_manager.is_finished());
        assert_eq!(app.animation_manager.cells.len(), 20);
    }

    #[test]
    fn test_regenerate_moves_to_next_seed() {
        let mut app = App::new(create_test_config());

        app.generate().expect("generation should succeed");
        app.regenerate().expect("regeneration should succeed");

        assert_eq!(app.seed, 13);
        assert_eq!(app.maze.as_ref().and_then(Maze::seed), Some(13));
    }

    #[test]
    fn test_generate_rejects_empty_grid() {
        let mut app = App::new(Config {
            columns: 0,
            ..create_test_config()
        });

        assert!(app.generate().is_err());
    }

    #[test]
    fn test_run_headless_output() {
        let config = Config {
            columns: 2,
            rows: 1,
            seed: 4,
            ..Config::default()
        };

        let out = run_headless(&config).expect("headless run should succeed");

        assert_eq!(
            out,
            "\
+   +---+
| *   * |
+---+   +
seed 4, 2x1: path of 2 cells
"
        );
    }
}
