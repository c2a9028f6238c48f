//! History consistency invariant: each entry is its predecessor plus one move.

use super::super::{HistoryEntry, Player, Position, Square, TimeTravelGame};
use super::Invariant;

/// Invariant: The history is a chain of single moves from the empty board.
///
/// Entry 0 is the empty board with no move. Every later entry differs
/// from the previous one in exactly the cell it records as its move, and
/// that cell holds the mark of the player whose turn it was.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks that `next` follows from `prev`, where `prev` is at `step`.
    pub fn follows(prev: &HistoryEntry, next: &HistoryEntry, step: usize) -> bool {
        let Some(pos) = next.last_move() else {
            return false;
        };
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| prev.board().get(*p) != next.board().get(*p))
            .collect();

        changed == [pos]
            && prev.board().is_empty(pos)
            && next.board().get(pos) == Square::Occupied(Player::for_step(step))
    }
}

impl Invariant<TimeTravelGame> for HistoryConsistentInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if *first != HistoryEntry::start() {
            return false;
        }

        history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::follows(&pair[0], &pair[1], step))
    }

    fn description() -> &'static str {
        "Each history entry is its predecessor plus one move"
    }
}
