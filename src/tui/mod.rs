//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};

use crate::config::AppConfig;
use crate::controller::{ControllerEvent, GameController};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{HeuristicStrategy, MoveStrategy};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// How long to wait for a key before checking the controller channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the terminal UI until the user quits.
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = %config.mode(), ai_delay_ms = config.ai_delay_ms(), "Starting noughts TUI");

    let strategy: Box<dyn MoveStrategy> = match config.seed() {
        Some(seed) => Box::new(HeuristicStrategy::seeded(*seed)),
        None => Box::new(HeuristicStrategy::random()),
    };
    let (controller, events_rx) = GameController::new(
        *config.mode(),
        strategy,
        Duration::from_millis(*config.ai_delay_ms()),
    );
    let mut app = App::new(controller);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, events_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.snapshot().scores(), "Exiting noughts TUI");
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut events_rx: mpsc::UnboundedReceiver<ControllerEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
            if app.should_quit() {
                return Ok(());
            }
        }

        while let Ok(event) = events_rx.try_recv() {
            app.handle_event(event);
        }

        // Let the AI timer task run between polls.
        tokio::task::yield_now().await;
    }
}
