//! Board Console - play extended chess or checkers in a terminal.
//!
//! Reads commands from stdin, one per line, and prints the board to stdout.
//! Diagnostics go to stderr and are filtered by `RUST_LOG`.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use board_core::Variant;
use board_engine::Game;
use clap::Parser;
use config::ConsoleConfig;
use render::RenderOptions;
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Board Console - extended chess and checkers in the terminal.
#[derive(Parser)]
#[command(name = "board-console")]
#[command(about = "Play extended chess or checkers in the terminal")]
struct Args {
    /// Rule set: standard, extended or checkers (overrides the config file)
    #[arg(long)]
    variant: Option<Variant>,

    /// Path to the TOML config file
    #[arg(long, default_value_os_t = ConsoleConfig::default_path())]
    config: PathBuf,

    /// Draw pieces as letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Do not mark threatened pieces
    #[arg(long)]
    no_threats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut config = ConsoleConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if args.ascii {
        config.unicode = false;
    }
    if args.no_threats {
        config.show_threats = false;
    }

    tracing::info!("Config file: {:?}", args.config);
    tracing::info!("Variant: {}", config.variant);
    tracing::info!("Unicode: {}, threats: {}", config.unicode, config.show_threats);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        Game::new(config.variant),
        RenderOptions::from(&config),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()?;

    let game = session.into_game();
    tracing::info!("Session ended after {} moves", game.move_count());
    Ok(())
}
