//! Terminal UI for the time-travel game.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use ui::draw;

use crate::config::AppConfig;
use crate::games::tictactoe::TimeTravelGame;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Run the TUI until the user quits.
///
/// Tracing output must not go to the terminal; install the subscriber with
/// [`LogTarget::File`](crate::LogTarget::File) first.
#[instrument(skip_all, fields(order = %config.initial_order()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(TimeTravelGame::with_order(*config.initial_order()));
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        step = app.game().step(),
        moves = app.game().history().len() - 1,
        "TUI exited"
    );
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code);
            if app.should_quit() {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
