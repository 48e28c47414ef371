//! Event handling functions for user input and application state updates.

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;

use crate::{
    types::{MainMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. The poll times out
/// no later than the next replay frame is due, so the replay keeps its pace while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.animation_manager.poll_timeout())? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Applies a single key press to the application state.
///
/// # Errors
///
/// This function may return errors if carving a new maze fails.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app)?,
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('r') => handle_r_events(app)?,
        _ => {}
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation in the main menu.
pub(crate) fn handle_j_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.next());
    }
}

/// Handles 'k' key press events for upward navigation in the main menu.
pub(crate) fn handle_k_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.previous());
    }
}

/// Handles 'l' key press events for selection.
///
/// Selecting "Generate" carves and solves a maze with the current seed and switches to the replay
/// screen. Selecting "Quit" leaves the application.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Generate) => {
            app.generate()?;
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for returning from the replay to the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.animation_manager.clear();
        app.screen = Screen::MainMenu(MainMenuItem::Generate);
    }
}

/// Handles 'r' key press events for carving a fresh maze with the next seed.
pub(crate) fn handle_r_events(app: &mut App) -> Result<()> {
    if app.screen == Screen::InGame {
        app.regenerate()?;
        debug!(seed = app.seed, "regenerated maze");
    }

    Ok(())
}
