//! Interactive play loop
//!
//! Reads guesses from stdin and drives the game engine, rendering each
//! `TurnResult`. The loop owns all I/O; the engine never blocks.

use crate::engine::{Game, GameConfig, TurnResult};
use crate::output::{
    guess_prompt, print_hint, print_intro, print_invalid, print_loss, print_quit,
    print_secret_debug, print_win,
};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Options for one interactive session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Seed the secret for a reproducible game
    pub seed: Option<u64>,
    /// Reveal the secret up front, for debugging
    pub show_secret: bool,
}

/// Run one interactive game to completion
///
/// # Errors
///
/// Returns an error if reading from stdin or writing the prompt fails.
pub fn run_play(config: GameConfig, options: PlayOptions) -> Result<()> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(config, &mut rng);

    print_intro(&config);
    if options.show_secret {
        print_secret_debug(&game.reveal_secret());
    }
    println!();

    while !game.is_over() {
        let prompt = guess_prompt(game.guesses_taken() + 1);
        let Some(line) = read_line(&prompt)? else {
            // stdin closed; treat like an explicit quit
            print_quit();
            return Ok(());
        };

        match game.submit(&line) {
            TurnResult::Invalid(err) => print_invalid(&err),
            TurnResult::Hint(hint) => print_hint(hint),
            TurnResult::Won(guesses) => print_win(guesses),
            TurnResult::Lost { secret, final_hint } => print_loss(&secret, final_hint),
            TurnResult::Quit => print_quit(),
        }
    }

    Ok(())
}

/// Prompt and read one line from stdin
///
/// Returns `None` at end of input.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .context("failed to read guess")?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
