//! tack TUI
//!
//! Terminal user interface for tack - a note list with a modal editor.
//!
//! ## Layout
//!
//! Two-pane layout:
//! - Left: Notes list (most recently modified first)
//! - Right: Detail preview (selected note)
//!
//! The editor opens as a centered overlay.
//!
//! ## Navigation
//!
//! - j/k or ↑/↓: Move selection up/down
//! - n: New note
//! - Enter or e: Edit selected note
//! - d: Delete selected note
//! - ?: Toggle help
//! - q: Quit
//!
//! ## Editor
//!
//! - Tab: Switch between title and content
//! - Ctrl+S: Save and close
//! - Ctrl+D: Delete the note being edited
//! - Ctrl+P: Cycle note color
//! - Esc: Discard and close

mod app;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tack_core::{Config, FileStore, NoteRepository};

use app::App;

/// Run the TUI application
pub fn run() -> Result<()> {
    let config = Config::load()?;

    // Initialize TUI logging (file-based, only if TACK_LOG is set)
    init_tui_logging(&config);

    let repo = NoteRepository::open(FileStore::new(&config));

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(repo);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Check for status message timeout
        app.check_status_timeout();

        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for terminal events with a short timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Initialize file-based logging for TUI mode
///
/// Stdout belongs to the terminal UI, so logs go to a file instead.
fn init_tui_logging(config: &Config) {
    // Only log if TACK_LOG is set
    let Ok(log_level) = std::env::var("TACK_LOG") else {
        return;
    };

    let log_path = config.log_path();

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("tack_core={},tack_cli={}", log_level, log_level));

    // Initialize file-based logging (ignore error if already initialized)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}
