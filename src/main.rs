//! contact-directory binary entry point.
//!
//! Parses options, sets up file logging, initializes the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.
//!
use clap::Parser;
use contact_directory::app::keymap::Keymap;
use contact_directory::app::worker::FetchWorker;
use contact_directory::app::{self, AppState, Theme};
use contact_directory::cli::Cli;
use contact_directory::error::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().with_ctx(|| "enable raw mode".to_string())?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .with_ctx(|| "enter alternate screen".to_string())?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).with_ctx(|| "create terminal".to_string())?;
    Ok(terminal)
}

/// The terminal belongs to the UI, so logs go to a file or nowhere.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_ctx(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    init_logging(&cli)?;
    tracing::info!(source = ?cli.source, page_size = cli.page_size, "starting");

    let worker = FetchWorker::spawn(cli.build_source())?;
    let mut state = AppState::new(Theme::load_or_init(&cli.theme), Keymap::load_or_init(&cli.keybinds));

    let mut terminal = init_terminal()?;

    let res = app::run(&mut terminal, &mut state, &worker);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err}");
    }
    Ok(())
}
