//! Goban: a small-board Go rules engine.
//!
//! ## Usage
//!
//! - `goban` / `goban gtp` - Start a GTP server for GUI integration
//! - `goban replay C3 D4 PASS ...` - Replay moves and print the score

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use goban::constants::DEFAULT_SIZE;
use goban::gtp::GtpEngine;
use goban::position::{Board, Color};

/// Goban: a small-board Go rules engine
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board size (2 to 9)
    #[arg(short, long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for hash tables and move selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Replay named moves on an empty board and print the result
    Replay {
        /// Moves such as C3, D4, PASS; Black moves first
        moves: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    match cli.command {
        Some(Commands::Gtp) | None => {
            let mut engine = GtpEngine::with_options(cli.size, cli.seed)?;
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Replay { moves }) => replay(cli.size, cli.seed, &moves)?,
    }
    Ok(())
}

fn replay(size: usize, seed: Option<u64>, moves: &[String]) -> anyhow::Result<()> {
    let mut board = match seed {
        Some(s) => Board::with_seed(size, s)?,
        None => Board::new(size)?,
    };
    for (i, name) in moves.iter().enumerate() {
        let legal = board
            .play_named(name)
            .with_context(|| format!("move {} ({name})", i + 1))?;
        if !legal {
            bail!("move {} ({name}) is illegal: suicide or repeated position", i + 1);
        }
    }
    info!(moves = moves.len(), hash = board.hash(), "replayed");

    let (black, white) = board.compute_score();
    let areas = board.count_areas();
    println!(
        "Black: {black} ({} stones, {} area)",
        board.stones(Color::Black),
        areas.black
    );
    println!(
        "White: {white} ({} stones, {} area)",
        board.stones(Color::White),
        areas.white
    );
    println!(
        "Captures: black {}, white {}",
        board.captures(Color::Black),
        board.captures(Color::White)
    );
    println!("Game over: {}", if board.is_game_over() { "yes" } else { "no" });
    println!("Score: {} ({})", board.final_go_score(), board.result());
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
