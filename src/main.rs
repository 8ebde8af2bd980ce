//! Mastermind - CLI
//!
//! Classic Mastermind for the terminal: guess the 4-color secret code in
//! 10 tries, with black/white peg hints after every guess.

use anyhow::Result;
use clap::Parser;
use mastermind::{
    commands::{PlayOptions, run_play},
    engine::{DEFAULT_MAX_GUESSES, GameConfig},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Classic Mastermind code-breaking game for the terminal",
    version,
    author
)]
struct Cli {
    /// Seed for the secret code (reproducible games)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the secret at game start (for debugging)
    #[arg(long)]
    show_secret: bool,

    /// Number of guesses allowed
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        max_guesses: cli.max_guesses,
        ..GameConfig::default()
    };
    let options = PlayOptions {
        seed: cli.seed,
        show_secret: cli.show_secret,
    };

    run_play(config, options)
}
