//! Tic-tac-toe - terminal front end
//!
//! Two local players share one keyboard (or mouse).

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tictactoe_tui::terminal::{self, Tui};
use tictactoe_tui::{App, Cli, Command, Replay, Settings, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli).context("Failed to load settings")?;

    match cli.command.clone().unwrap_or_default() {
        Command::Play => run_play(settings),
        Command::Replay { moves, json } => run_replay(settings, &moves, json),
    }
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log().filter()))
}

/// Run the interactive game
fn run_play(settings: Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_path = settings.log().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mut terminal = terminal::setup().context("Failed to set up terminal")?;

    let app = App::new(settings.labels().clone());
    let res = run_app(&mut terminal, app);
    let restored = terminal::restore(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res?;
    restored.context("Failed to restore terminal")
}

/// Draw, wait for input, repeat until the player quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    let mut cells = [Rect::default(); 9];

    while !*app.should_quit() {
        terminal.draw(|f| cells = ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, &cells),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Play moves headlessly and print the result
fn run_replay(settings: Settings, moves: &[u8], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&settings))
        .with_writer(io::stderr)
        .try_init();

    let replay = Replay::run(moves);
    if json {
        let summary = replay.summary(settings.labels());
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to encode snapshot")?
        );
    } else {
        print!("{}", replay.render_text(settings.labels()));
    }
    Ok(())
}
