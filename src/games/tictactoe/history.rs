//! Move history entries and their display order.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One snapshot in the move history.
///
/// Entry 0 is always the empty board with no move; every later entry
/// records the move that produced its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// Creates the initial entry: empty board, no move.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Creates an entry for a board reached by playing `last_move`.
    pub fn after_move(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, if any.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// One-based column of the last move.
    pub fn column(&self) -> Option<usize> {
        self.last_move.map(Position::column)
    }

    /// One-based row of the last move.
    pub fn row(&self) -> Option<usize> {
        self.last_move.map(Position::row)
    }

    /// Describes the jump to this entry as shown in the move list.
    pub fn description(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) if step > 0 => format!("Go to move #{step}({},{})", pos.column(), pos.row()),
            _ => "Go to move start".to_string(),
        }
    }
}

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    #[strum(to_string = "ASC")]
    Ascending,
    /// Newest move first.
    #[strum(to_string = "DESC")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_entry_has_no_coordinates() {
        let entry = HistoryEntry::start();
        assert_eq!(entry.column(), None);
        assert_eq!(entry.row(), None);
        assert_eq!(entry.description(0), "Go to move start");
    }

    #[test]
    fn test_description_uses_column_then_row() {
        let entry = HistoryEntry::after_move(Board::new(), Position::MiddleRight);
        assert_eq!(entry.description(3), "Go to move #3(3,2)");
    }

    #[test]
    fn test_order_toggles_back() {
        assert_eq!(SortOrder::default().toggled().toggled(), SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.to_string(), "DESC");
    }
}
