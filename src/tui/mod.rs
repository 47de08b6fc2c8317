//! Terminal UI for proset.

mod input;
mod ui;

pub use input::{Action, action_for_key};

use crate::ClientConfig;
use crate::gateway::BackendGateway;
use crate::session::{GameSessionController, SessionHandle};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI against `gateway` until the player quits.
pub async fn run_tui<G: BackendGateway + 'static>(gateway: G, config: &ClientConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting proset TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let controller = GameSessionController::new(gateway, config.settle_delay());
    let handle = SessionHandle::spawn(controller);

    let res = run_game_loop(&mut terminal, &handle);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Proset TUI closed");
    res
}

/// Draws the latest snapshot and forwards key presses until quit.
#[instrument(skip_all)]
fn run_game_loop<B, G>(terminal: &mut Terminal<B>, handle: &SessionHandle<G>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    G: BackendGateway + 'static,
{
    loop {
        let snapshot = handle.current();
        terminal.draw(|f| ui::draw(f, &snapshot))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match action_for_key(key.code) {
                Some(Action::Quit) => {
                    info!("Player quit");
                    return Ok(());
                }
                Some(Action::Session(command)) => {
                    info!(?command, "Queueing command");
                    handle.send(command)?;
                }
                None => {}
            }
        }
    }
}
