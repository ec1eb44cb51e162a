//! Terminal UI for strictly_tictactoe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_tictactoe::GameConfig;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument, warn};

use app::App;

/// Runs the TUI until the user quits.
///
/// Logs go to the configured file so they don't draw over the board.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = %config.mode(), "Starting Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    // Dropped on every exit path, including a failed setup below.
    let restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.mode());
    let res = run_app(&mut terminal, &mut app).await;

    drop(restore);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Leaves the alternate screen and raw mode, logging instead of failing.
fn restore_terminal() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
}

/// Runs a cleanup closure when dropped.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Draw, poll, apply: one pass per tick until the app wants to quit.
#[instrument(skip_all)]
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports both press and release on some platforms.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = input::action_for(key) {
                app.handle_action(action);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
