//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here is stored: the
//! outcome of a position is recomputed whenever it is asked for.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::{instrument, trace};

/// Evaluates a board snapshot.
///
/// The first completed line in scan order wins. Without a line, a full
/// board is a draw and anything else is still in play.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = match check_winner(board) {
        Some((player, line)) => Outcome::Win { player, line },
        None if is_full(board) => Outcome::Draw,
        None => Outcome::NoResult,
    };
    trace!(?outcome, "Board evaluated");
    outcome
}
