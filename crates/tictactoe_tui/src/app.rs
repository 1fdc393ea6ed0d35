//! Application state and logic.

use crate::input::{self, Action};
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::{Position as ScreenPosition, Rect};
use tictactoe::{GameState, MarkLabels, Position, status_line};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the single [`GameState`] for the session.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    game: GameState,
    /// Labels drawn for each mark.
    labels: MarkLabels,
    /// Highlighted cell for keyboard play.
    cursor: Position,
    /// Set once the player asks to leave.
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(labels))]
    pub fn new(labels: MarkLabels) -> Self {
        Self {
            game: GameState::new(),
            labels,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The status line for the current game.
    pub fn status(&self) -> String {
        status_line(&self.game, &self.labels)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = input::action_for(key, self.cursor) {
            self.apply(action);
        }
    }

    /// Handles a mouse event. A left click on a cell selects it.
    ///
    /// `cells` are the screen areas of the nine cells from the last draw.
    #[instrument(skip(self, cells), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, cells: &[Rect; 9]) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let point = ScreenPosition::new(mouse.column, mouse.row);
        let hit = cells
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index);
        if let Some(pos) = hit {
            self.cursor = pos;
            self.select(pos);
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Places the current mark at `pos` if the cell is enabled.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) {
        if !self.game.can_place(pos) {
            debug!(position = %pos, "Cell disabled, ignoring selection");
            return;
        }
        self.game.place(pos);
        info!(position = %pos, status = %self.status(), "Move played");
    }

    /// Restarts the game. The cursor stays where it is.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
    }
}
