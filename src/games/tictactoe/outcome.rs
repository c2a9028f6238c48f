//! Result of evaluating a board snapshot.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues.
    NoResult,
    /// A player completed a line.
    Win {
        /// The occupant of the line.
        player: Player,
        /// The winning cells, in line order.
        line: [Position; 3],
    },
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further move may be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoResult => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Winner: {player}"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
