//! Tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Games**: board types, the outcome evaluator and the time-travel
//!   engine that owns the move history
//! - **View**: presentation model shared by every front end
//! - **TUI**: interactive terminal front end
//! - **Replay**: scripted play from action tokens
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameView, Position, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//! game.jump_to(1).unwrap();
//!
//! let view = GameView::from_game(&game);
//! assert_eq!(view.status(), "Next player: O");
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod logging;
mod replay;
mod view;

// Public module declarations
pub mod games;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Logging
pub use logging::{LogTarget, init_tracing};

// Crate-level exports - Presentation model
pub use view::{CellView, GameView, MoveItem, status_line};

// Crate-level exports - Scripted play
pub use replay::{ReplayError, parse_script, play_script};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, BoardParseError, GameError, HistoryEntry, MoveDisposition,
    Outcome, Player, Position, SortOrder, Square, TimeTravelGame, evaluate,
};
