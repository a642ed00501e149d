//! tictac_threads - one game of tic-tac-toe, two player threads.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictac_threads::{ConsoleObserver, OutputFormat, SilentObserver, console, play_game};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = cli.resolve()?;

    info!("Starting game");
    // JSON owns stdout, so the live board is only drawn in text mode.
    let report = match cli.format {
        OutputFormat::Text => play_game(&config, ConsoleObserver::new(*config.clear_screen()))?,
        OutputFormat::Json => play_game(&config, SilentObserver)?,
    };
    console::print_report(&report, cli.format, *config.clear_screen())?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictac_threads=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
