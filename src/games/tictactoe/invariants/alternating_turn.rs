//! Alternating turn invariant: X, O, X, O, ... on every snapshot.

use super::super::{Board, Player, TimeTravelGame};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The snapshot at step `n` holds exactly `n` marks, and X leads O by
/// zero or one.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks a single snapshot against its step.
    pub fn snapshot_holds(board: &Board, step: usize) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x + o == step && (x == o || x == o + 1)
    }
}

impl Invariant<TimeTravelGame> for AlternatingTurnInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(step, entry)| Self::snapshot_holds(entry.board(), step))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
