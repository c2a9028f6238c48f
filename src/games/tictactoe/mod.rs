//! Tic-tac-toe with a navigable move history.

mod action;
mod game;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Action, ActionError, GameError, MoveDisposition};
pub use game::TimeTravelGame;
pub use history::{HistoryEntry, SortOrder};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, BoardParseError, Player, Square};
