mod app;
mod domain;
mod error;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notifications::TerminalNotifier;
use persistence::{
    config_file, ensure_dir, get_data_dir, history_file, init_local_dir, load_settings, log_file,
    save_settings, HistoryStore, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "refocus")]
#[command(about = "A small terminal focus timer that remembers what you focused on", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .refocus, then ~/.refocus
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Length of a new session in minutes (overrides config.json)
    #[arg(short, long, global = true)]
    minutes: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .refocus directory in the current directory
    Init,
    /// Print the focus history
    History,
    /// Remove every entry from the focus history
    Clear,
    /// Write the default config.json if missing and print the active settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_dir()?;
        println!("Initialized refocus directory: {}", data_dir.display());
        println!();
        println!("Refocus will now keep its history in this directory.");
        return Ok(());
    }

    let data_dir = match cli.dir {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    let data_dir = ensure_dir(&data_dir)?;
    init_logging(&data_dir);

    match cli.command {
        Some(Commands::History) => print_history(&data_dir),
        Some(Commands::Clear) => clear_history(&data_dir),
        Some(Commands::Config) => print_config(&data_dir),
        Some(Commands::Init) | None => run_tui(&data_dir, cli.minutes),
    }
}

/// Send tracing output to today's log file; the terminal belongs to the UI
fn init_logging(data_dir: &Path) {
    let path = log_file(data_dir);
    let file = path
        .parent()
        .map(std::fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(e) => eprintln!("Warning: could not open log file {}: {}", path.display(), e),
    }
}

fn print_history(data_dir: &Path) -> Result<()> {
    let store = HistoryStore::load(history_file(data_dir));
    if store.is_empty() {
        println!("Nothing yet");
        return Ok(());
    }
    for outcome in store.entries() {
        println!("{} {}", outcome.status.glyph(), outcome.subject);
    }
    Ok(())
}

fn clear_history(data_dir: &Path) -> Result<()> {
    let mut store = HistoryStore::load(history_file(data_dir));
    let count = store.len();
    store.clear();
    store.persist().context("Failed to clear focus history")?;
    info!(count, "focus history cleared from the command line");
    println!("Cleared {} entries", count);
    Ok(())
}

fn print_config(data_dir: &Path) -> Result<()> {
    let path = config_file(data_dir);
    if !path.exists() {
        save_settings(&path, &Settings::default())?;
        println!("Wrote default settings to {}", path.display());
    }
    let settings = load_settings(&path);
    println!("{}", path.display());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn run_tui(data_dir: &Path, minutes: Option<f64>) -> Result<()> {
    let mut settings = load_settings(config_file(data_dir));
    if let Some(minutes) = minutes {
        settings.default_minutes = minutes;
    }

    // Persisted history is always loaded; later saves overwrite it
    let history = HistoryStore::load(history_file(data_dir));
    let notifier = TerminalNotifier {
        bell: settings.bell,
        desktop_notification: settings.desktop_notification,
    };
    let mut app = AppState::new(history, settings, Box::new(notifier));
    info!(dir = %data_dir.display(), entries = app.history.len(), "refocus started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    finish(&mut app, || restore_terminal(&mut terminal))?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Record any unfinished session and flush history, then restore the terminal.
/// A failing restore cannot lose the session.
fn finish<F>(app: &mut AppState, restore: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    app.shutdown();
    restore()
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());

        if app.needs_save() {
            app.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionStatus;
    use crate::notifications::SilentNotifier;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finish_records_session_when_restore_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("focus_history.json");
        let history = HistoryStore::new(&path);
        let mut app = AppState::new(history, Settings::default(), Box::new(SilentNotifier));
        app.submit_subject("Piano");

        let result = finish(&mut app, || Err(anyhow::anyhow!("tty gone")));
        assert!(result.is_err());
        assert!(app.active.is_none());

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].subject, "Piano");
        assert_eq!(reloaded.entries()[0].status, SessionStatus::Incomplete);
    }
}
