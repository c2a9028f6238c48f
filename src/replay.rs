//! Scripted play: apply a list of action tokens to a fresh game.

use crate::games::tictactoe::{Action, ActionError, GameError, SortOrder, TimeTravelGame};
use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

/// Error running a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A token could not be parsed.
    #[display("Token #{}: {}", index, source)]
    Parse {
        /// Zero-based token index.
        index: usize,
        /// Parse failure.
        source: ActionError,
    },
    /// An action was rejected by the game.
    #[display("Token #{} ({}): {}", index, action, source)]
    Rejected {
        /// Zero-based token index.
        index: usize,
        /// The rejected action.
        action: Action,
        /// Rejection reason.
        source: GameError,
    },
}

/// Parses every token up front, so a typo aborts before anything is played.
///
/// # Errors
///
/// Returns [`ReplayError::Parse`] for the first bad token.
#[instrument(skip(tokens))]
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Action>, ReplayError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token
                .as_ref()
                .parse::<Action>()
                .map_err(|source| ReplayError::Parse { index, source })
        })
        .collect()
}

/// Plays `actions` against a new game whose move list starts in `order`.
///
/// Ignored moves (occupied square, finished game) are logged and skipped.
///
/// # Errors
///
/// Returns [`ReplayError::Rejected`] for a jump past the end of the history.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn play_script(actions: &[Action], order: SortOrder) -> Result<TimeTravelGame, ReplayError> {
    let mut game = TimeTravelGame::with_order(order);
    for (index, action) in actions.iter().copied().enumerate() {
        match game.apply(action) {
            Ok(Some(disposition)) if !disposition.is_applied() => {
                warn!(index, %action, %disposition, "Move ignored");
            }
            Ok(_) => {}
            Err(source) => {
                return Err(ReplayError::Rejected {
                    index,
                    action,
                    source,
                });
            }
        }
    }
    info!(step = game.step(), history = game.history().len(), "Script finished");
    Ok(game)
}
