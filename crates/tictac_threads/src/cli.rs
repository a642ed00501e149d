//! Command-line interface for tictac_threads.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictac_threads::{GameConfig, OutputFormat, StrategyKind};
use tracing::{info, instrument};

/// Two threads play tic-tac-toe against each other
#[derive(Parser, Debug)]
#[command(name = "tictac_threads")]
#[command(about = "Two-thread tic-tac-toe with mutex and condvar turn handoff", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Strategy for player X (sequential or random)
    #[arg(long)]
    pub x: Option<String>,

    /// Strategy for player O (sequential or random)
    #[arg(long)]
    pub o: Option<String>,

    /// Delay after each accepted move, in milliseconds
    #[arg(long)]
    pub pace_ms: Option<u64>,

    /// Seed for random strategies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Final report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Merges the config file (if any) with command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(name) = &self.x {
            config = config.with_x(StrategyKind::parse(name)?);
        }
        if let Some(name) = &self.o {
            config = config.with_o(StrategyKind::parse(name)?);
        }
        if let Some(pace_ms) = self.pace_ms {
            config = config.with_pace_ms(pace_ms);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        if self.no_clear || self.format == OutputFormat::Json {
            config = config.with_clear_screen(false);
        }

        info!(?config, "Configuration resolved");
        Ok(config)
    }
}
