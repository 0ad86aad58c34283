//! Rock-Paper-Scissors-Plus referee
//!
//! Plays one three-round match between the terminal user and a bot that
//! picks uniformly at random.

mod args;
mod console;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use referee_logic::{RandomOpponent, Referee, SeededRng};

use args::Args;

fn init_logging(level: log::LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level())?;

    let rng = SeededRng::new(args.seed.unwrap_or_else(rand::random));
    log::info!("bot seed {}", rng.seed());

    let mut referee = Referee::new(RandomOpponent::new(rng));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    console::print_banner(&mut out)?;
    console::play(&mut referee, &mut input, &mut out)?;

    let summary = referee.summary();
    console::print_summary(&mut out, &summary)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("serialize summary")?;
        writeln!(out, "{}", json)?;
    }

    Ok(())
}
