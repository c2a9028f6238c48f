//! Time-travel game engine for tic-tac-toe.
//!
//! The engine owns the full move history and a pointer into it. Moves
//! append to the history (dropping any entries past the pointer), jumps
//! only move the pointer. Whose turn it is, and whether the game is over,
//! are always derived from the entry under the pointer.

use super::action::{Action, GameError, MoveDisposition};
use super::history::{HistoryEntry, SortOrder};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::evaluate;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with a navigable move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTravelGame {
    history: Vec<HistoryEntry>,
    step: usize,
    order: SortOrder,
}

impl TimeTravelGame {
    /// Creates a new game: empty board at step 0, X to move, ascending list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates a new game with the move list in the given order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
            order,
        }
    }

    /// The full move history, including entries past the current step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry currently shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Display order of the move list.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The entry currently shown.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The board currently shown.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// The player to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Places the active player's mark at `pos`.
    ///
    /// Ignored when the current board is already decided or the square is
    /// taken. Otherwise any history past the current step is discarded and
    /// the new board becomes the current step.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveDisposition {
        if self.outcome().is_over() {
            debug!("Move ignored, game is over");
            return MoveDisposition::GameOver;
        }
        if !self.board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveDisposition::Occupied(pos);
        }

        let mut board = *self.board();
        board.set(pos, Square::Occupied(self.next_player()));

        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry::after_move(board, pos));
        self.step = self.history.len() - 1;

        info!(discarded, new_step = self.step, "Move applied");
        self.debug_check_invariants();
        MoveDisposition::Applied
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfRange`] for indices past 8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveDisposition, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::CellOutOfRange(index))?;
        Ok(self.apply_move(pos))
    }

    /// Moves the step pointer to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is not a history index;
    /// the game is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        info!(next_player = %self.next_player(), "Jumped in history");
        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = %self.order, "Order toggled");
    }

    /// Dispatches a user action.
    ///
    /// Placements report their disposition; jumps and toggles report
    /// `None`.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::StepOutOfRange`] from [`Self::jump_to`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<Option<MoveDisposition>, GameError> {
        match action {
            Action::Place(pos) => Ok(Some(self.apply_move(pos))),
            Action::JumpTo(step) => self.jump_to(step).map(|()| None),
            Action::ToggleOrder => {
                self.toggle_order();
                Ok(None)
            }
        }
    }

    /// History indices in display order.
    pub fn steps_in_order(&self) -> Vec<usize> {
        let steps = 0..self.history.len();
        match self.order {
            SortOrder::Ascending => steps.collect(),
            SortOrder::Descending => steps.rev().collect(),
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "{:?}",
            TicTacToeInvariants::check_all(self)
        );
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
