//! Application state and key handling.

use super::input::{digit_position, move_cursor, move_selection};
use crate::games::tictactoe::{Position, TimeTravelGame};
use crate::view::GameView;
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows move the history selection.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: TimeTravelGame,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a game.
    pub fn new(game: TimeTravelGame) -> Self {
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: String::new(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &TimeTravelGame {
        &self.game
    }

    /// Builds the view for the next frame.
    pub fn view(&self) -> GameView {
        GameView::from_game(&self.game)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = %self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(pos) = digit_position(key) {
            self.place(pos);
            return;
        }

        match (self.focus, key) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            (_, KeyCode::Tab) => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.select_current_step();
            }
            (_, KeyCode::Char('o')) => {
                self.game.toggle_order();
                self.message = format!("Move list order: {}", self.game.order());
                self.select_current_step();
            }
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => self.place(self.cursor),
            (Focus::Board, _) => self.cursor = move_cursor(self.cursor, key),
            (Focus::History, KeyCode::Enter | KeyCode::Char(' ')) => self.jump_to_selected(),
            (Focus::History, _) => {
                self.selected = move_selection(self.selected, self.game.history().len(), key);
            }
        }
    }

    fn place(&mut self, pos: Position) {
        let disposition = self.game.apply_move(pos);
        self.message = if disposition.is_applied() {
            format!("Played {}", pos.label())
        } else {
            format!("Move {disposition}")
        };
        self.cursor = pos;
        self.select_current_step();
    }

    fn jump_to_selected(&mut self) {
        let Some(step) = self.game.steps_in_order().get(self.selected).copied() else {
            return;
        };
        self.message = match self.game.jump_to(step) {
            Ok(()) => format!("Jumped to step {step}"),
            Err(e) => e.to_string(),
        };
    }

    fn select_current_step(&mut self) {
        let step = self.game.step();
        self.selected = self
            .game
            .steps_in_order()
            .iter()
            .position(|s| *s == step)
            .unwrap_or(0);
    }
}
