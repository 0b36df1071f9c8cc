//! Session controller: the single owner of application state.
//!
//! Every user intent goes through a `Session` method. Methods that are not
//! valid on the current screen return `SheetError::InvalidTransition` and
//! leave the session untouched.

use tracing::{debug, info};

use crate::catalog::ItemId;
use crate::core::{validate_player_count, PlayerId, SheetConfig};
use crate::deduction::DeductionSummary;
use crate::error::SheetError;
use crate::game::Game;
use crate::grid::{Mark, MarkChange};

use super::screen::Screen;

/// Application state for one sheet.
///
/// ## Example
///
/// ```
/// use detective_sheet::catalog::ItemId;
/// use detective_sheet::core::PlayerId;
/// use detective_sheet::session::{Screen, Session};
/// use detective_sheet::Mark;
///
/// let mut session = Session::new();
/// session.start_new_game().unwrap();
/// session.select_player_count(4).unwrap();
/// session.submit_setup().unwrap();
/// assert_eq!(session.screen(), Screen::Game);
///
/// session.select_tool(Mark::Yes).unwrap();
/// session.click_cell(ItemId::weapon(2), PlayerId::new(1)).unwrap();
/// assert_eq!(session.deduction().unwrap().weapons.len(), 5);
///
/// session.request_exit().unwrap();
/// session.confirm_exit().unwrap();
/// assert_eq!(session.screen(), Screen::Home);
/// assert!(session.game().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    screen: Screen,
    setup: SheetConfig,
    game: Option<Game>,
    active_tool: Mark,
    show_deduction: bool,
    show_exit_confirm: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(SheetConfig::default())
    }
}

impl Session {
    /// Create a session on the home screen with the default setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose setup starts from `config`.
    #[must_use]
    pub fn with_config(config: SheetConfig) -> Self {
        Self {
            screen: Screen::Home,
            setup: config,
            game: None,
            active_tool: Mark::No,
            show_deduction: false,
            show_exit_confirm: false,
        }
    }

    /// The screen being shown.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Player count currently selected on the setup screen.
    #[must_use]
    pub fn setup_player_count(&self) -> usize {
        self.setup.player_count
    }

    /// The active game, if one is running.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// The tool applied by `click_cell`.
    #[must_use]
    pub fn active_tool(&self) -> Mark {
        self.active_tool
    }

    /// Whether the deduction panel is open.
    #[must_use]
    pub fn is_deduction_visible(&self) -> bool {
        self.show_deduction
    }

    /// Whether the exit confirmation is showing.
    #[must_use]
    pub fn is_exit_pending(&self) -> bool {
        self.show_exit_confirm
    }

    // === Home / Setup ===

    /// Home -> Setup.
    pub fn start_new_game(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Home, "start a new game")?;
        self.screen = Screen::Setup;
        Ok(())
    }

    /// Setup -> Home.
    pub fn back(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Setup, "go back")?;
        self.screen = Screen::Home;
        Ok(())
    }

    /// Choose how many players sit at the table.
    pub fn select_player_count(&mut self, count: usize) -> Result<(), SheetError> {
        self.require(Screen::Setup, "select the player count")?;
        validate_player_count(count)?;
        self.setup.player_count = count;
        Ok(())
    }

    /// Setup -> Game: build the roster and a fresh grid.
    pub fn submit_setup(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Setup, "submit the setup")?;
        let game = Game::start(self.setup.clone())?;

        self.game = Some(game);
        self.screen = Screen::Game;
        self.show_exit_confirm = false;
        Ok(())
    }

    // === Game ===

    /// Pick the tool for subsequent cell clicks.
    pub fn select_tool(&mut self, tool: Mark) -> Result<(), SheetError> {
        self.require(Screen::Game, "select a tool")?;
        debug!(%tool, "tool selected");
        self.active_tool = tool;
        Ok(())
    }

    /// Apply the active tool to `(item, player)`.
    pub fn click_cell(&mut self, item: ItemId, player: PlayerId) -> Result<MarkChange, SheetError> {
        let tool = self.active_tool;
        let game = self.game_mut("mark a cell")?;
        Ok(game.set_mark(item, player, tool))
    }

    /// Open or close the deduction panel. Returns the new visibility.
    pub fn toggle_deduction(&mut self) -> Result<bool, SheetError> {
        self.require(Screen::Game, "toggle the deduction panel")?;
        self.show_deduction = !self.show_deduction;
        Ok(self.show_deduction)
    }

    /// The deduction panel for the current grid.
    pub fn deduction(&self) -> Result<DeductionSummary, SheetError> {
        self.require(Screen::Game, "show deductions")?;
        self.game
            .as_ref()
            .map(Game::deduction)
            .ok_or(SheetError::InvalidTransition {
                screen: self.screen,
                action: "show deductions",
            })
    }

    /// Ask to leave the game; nothing is discarded until confirmed.
    pub fn request_exit(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Game, "request exit")?;
        self.show_exit_confirm = true;
        Ok(())
    }

    /// Dismiss the exit confirmation and keep playing.
    pub fn cancel_exit(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Game, "cancel exit")?;
        self.show_exit_confirm = false;
        Ok(())
    }

    /// Game -> Home, discarding the roster and grid.
    ///
    /// Only valid while the exit confirmation is showing.
    pub fn confirm_exit(&mut self) -> Result<(), SheetError> {
        self.require(Screen::Game, "confirm exit")?;
        if !self.show_exit_confirm {
            return Err(SheetError::InvalidTransition {
                screen: self.screen,
                action: "confirm exit without a pending request",
            });
        }

        info!("game discarded");
        self.game = None;
        self.screen = Screen::Home;
        self.show_exit_confirm = false;
        self.show_deduction = false;
        Ok(())
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), SheetError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(SheetError::InvalidTransition {
                screen: self.screen,
                action,
            })
        }
    }

    fn game_mut(&mut self, action: &'static str) -> Result<&mut Game, SheetError> {
        self.require(Screen::Game, action)?;
        let screen = self.screen;
        self.game
            .as_mut()
            .ok_or(SheetError::InvalidTransition { screen, action })
    }
}
