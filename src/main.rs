//! Folio - a single-page personal portfolio for the terminal.
//!
//! A hero with identity and social links, a list of project cards, and a
//! contact form, laid out as one scrollable page under a fixed navigation
//! bar. The navigation tracks which section is in view as the page scrolls.

mod app;
mod cli;
mod config;
mod constants;
mod event;
mod message;
mod state;
mod theme;
mod tui;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::args::{Args, Commands};
use config::Config;
use event::{EventHandler, ScrollSubscription};
use tui::TerminalSession;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);
    let config = Config::load(&config_path)?;

    match args.command {
        Some(Commands::Projects { json }) => cli::commands::projects(&mut io::stdout().lock(), json),
        Some(Commands::Links) => cli::commands::links(&mut io::stdout().lock()),
        Some(Commands::Config) => {
            cli::commands::config(&mut io::stdout().lock(), &config_path, &config)
        }
        None => {
            init_logging(&config.log_level, &config::log_dir())?;
            run_page(&config)
        }
    }
}

/// Send `tracing` output to a log file; the terminal belongs to the page.
fn init_logging(default_level: &str, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(constants::LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .wrap_err("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_page(config: &Config) -> Result<()> {
    let cell_height_px = tui::cell_height_px(config.cell_height_px);
    tracing::info!(
        version = constants::APP_VERSION,
        cell_height_px,
        "{} starting",
        constants::APP_NAME
    );

    // declaration order is the reverse of drop order: the subscription and
    // the event thread go away before the terminal is restored
    let mut session = TerminalSession::enter()?;
    let _scroll = ScrollSubscription::acquire(config.mouse)?;
    let events = EventHandler::new(config.tick_rate_ms);

    let size = session.terminal.size()?;
    let mut app = App::new(config, cell_height_px, size.width, size.height);

    while !app.should_quit {
        session
            .terminal
            .draw(|frame| ui::render(frame, &app))
            .wrap_err("Failed to draw frame")?;
        app.handle_event(events.next()?);
    }

    tracing::info!("{} exiting", constants::APP_NAME);
    io::stdout().flush()?;
    Ok(())
}
