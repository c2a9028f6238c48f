//! Step pointer invariant.

use super::super::TimeTravelGame;
use super::Invariant;

/// Invariant: The current step is a valid index into the history.
pub struct StepInBoundsInvariant;

impl Invariant<TimeTravelGame> for StepInBoundsInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes into the history"
    }
}
