//! Strictly Reversi - console entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_reversi::Board;
use strictly_reversi_console::{Cli, Command, ConsoleConfig, ConsoleView, TurnLoop};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            end_policy,
            coordinates,
            hints,
        } => run_play(config, end_policy, coordinates, hints),
        Command::Show { coordinates } => run_show(coordinates),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: Option<std::path::PathBuf>,
    end_policy: Option<strictly_reversi::EndPolicy>,
    coordinates: bool,
    hints: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    }
    .with_end_policy(end_policy)
    .with_coordinates(coordinates)
    .with_hints(hints);

    info!(policy = %config.end_policy(), "Starting console game");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let finished = TurnLoop::new(stdin, stdout, config).run()?;

    info!(outcome = %finished.outcome(), "Console game finished");
    Ok(())
}

/// Print the starting board
#[instrument]
fn run_show(coordinates: bool) -> Result<()> {
    let board = Board::new();
    print!("{}", ConsoleView::new(&board).with_coordinates(coordinates));
    Ok(())
}
