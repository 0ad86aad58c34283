//! Command-line arguments

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rock-Paper-Scissors-Plus against a random bot", long_about = None)]
pub struct Args {
    /// Seed for the bot's moves; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final summary as JSON after the match
    #[arg(long)]
    pub json: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
