//! First-class action types for the time-travel game.
//!
//! Actions are the user's intent (place, jump, reorder), separate from
//! their execution. They can be parsed from text, logged and replayed.

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the active player's mark.
    Place(Position),
    /// Travel to a step in the move history.
    JumpTo(usize),
    /// Flip the move list between ascending and descending.
    ToggleOrder,
}

impl FromStr for Action {
    type Err = ActionError;

    /// Parses `0`-`8` or a cell name (`center`, `top-left`, ...) as a
    /// placement, `jump:N` / `j:N` as a jump and `toggle` / `t` as an order
    /// flip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if let Some(step) = token.strip_prefix("jump:").or_else(|| token.strip_prefix("j:")) {
            return step
                .parse::<usize>()
                .map(Action::JumpTo)
                .map_err(|_| ActionError::Unrecognized(s.to_string()));
        }
        match token.as_str() {
            "toggle" | "t" => Ok(Action::ToggleOrder),
            _ => match token.parse::<usize>() {
                Ok(index) => Position::from_index(index)
                    .map(Action::Place)
                    .ok_or(ActionError::CellOutOfRange(index)),
                Err(_) => Position::from_label_or_number(&token)
                    .map(Action::Place)
                    .ok_or_else(|| ActionError::Unrecognized(s.to_string())),
            },
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "{}", pos.to_index()),
            Action::JumpTo(step) => write!(f, "jump:{step}"),
            Action::ToggleOrder => write!(f, "toggle"),
        }
    }
}

/// What happened to a requested move.
///
/// Rejected moves are not errors: the game simply ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveDisposition {
    /// The mark was placed and a new history entry appended.
    #[display("applied")]
    Applied,
    /// The target cell already holds a mark.
    #[display("ignored: square {} is occupied", _0)]
    Occupied(Position),
    /// The current board is already won or drawn.
    #[display("ignored: game is over")]
    GameOver,
}

impl MoveDisposition {
    /// Returns true if the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveDisposition::Applied)
    }
}

/// Error parsing an action token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// Token is not a cell, a jump or a toggle.
    #[display("Unrecognized action {:?} (expected 0-8, a cell name, jump:N or toggle)", _0)]
    Unrecognized(String),

    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),
}

impl std::error::Error for ActionError {}

/// Error applying an action to the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// Jump target past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },
}

impl std::error::Error for GameError {}
