//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. This is used
/// to determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the main menu, holding the currently highlighted item.
    MainMenu(MainMenuItem),
    /// Maze replay screen.
    ///
    /// This variant represents the screen where the maze is carved and solved on a canvas.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// the user can select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Generate" menu option.
    ///
    /// This variant represents carving and solving a new maze.
    Generate,
    /// "Quit" menu option.
    ///
    /// This variant represents leaving the application.
    Quit,
}

impl MainMenuItem {
    /// All menu items in display order.
    pub(crate) const ALL: [Self; 2] = [Self::Generate, Self::Quit];

    /// Returns the label shown for the item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generate",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Generate | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Generate | Self::Quit => Self::Generate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_variants() {
        let main_menu = Screen::MainMenu(MainMenuItem::Generate);
        let in_game = Screen::InGame;

        assert_eq!(main_menu, Screen::MainMenu(MainMenuItem::Generate));
        assert_eq!(in_game, Screen::InGame);
        assert_ne!(main_menu, in_game);
        assert_ne!(main_menu, Screen::MainMenu(MainMenuItem::Quit));
    }

    #[test]
    fn test_main_menu_navigation() {
        assert_eq!(MainMenuItem::Generate.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Quit);
        assert_eq!(MainMenuItem::Quit.previous(), MainMenuItem::Generate);
        assert_eq!(MainMenuItem::Generate.previous(), MainMenuItem::Generate);
    }

    #[test]
    fn test_main_menu_labels() {
        let labels: Vec<_> = MainMenuItem::ALL.into_iter().map(MainMenuItem::label).collect();

        assert_eq!(labels, vec!["Generate", "Quit"]);
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", Screen::InGame), "InGame");
        assert_eq!(format!("{:?}", MainMenuItem::Generate), "Generate");
    }
}
