//! Display functions for game events
//!
//! Renders each `TurnResult` variant; all game decisions stay in the
//! engine.

use super::formatters::ordinal;
use crate::core::{CodeError, Feedback, Symbol};
use crate::engine::{GameConfig, QUIT_TOKEN};
use colored::Colorize;

/// Print the introduction and rules banner
pub fn print_intro(config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Welcome to Mastermind!".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nHere's how to play the game:\n");
    println!("  - I create a secret code based on the following colors:");
    for symbol in Symbol::ALPHABET {
        println!("        {} ({})", symbol.name(), symbol.letter());
    }

    println!("\n  - After each guess I give you hints!");
    println!("      * For every color that you guess that is in exactly");
    println!("        the right position, I will give you a black peg.");
    println!("      * For every color that you guess that is in the code,");
    println!("        but not in the right position, I will give you a white peg.");

    println!(
        "\n  - You will have {} chances to guess the code.",
        config.max_guesses
    );
    println!("\n  - Type \"{QUIT_TOKEN}\" to stop the program.");
    println!("\nLet's get started!");
}

/// The prompt for the player's next guess (1-based)
#[must_use]
pub fn guess_prompt(guess_number: u32) -> String {
    format!("What's your {} guess? ", ordinal(guess_number))
}

/// Print the pegs earned by a non-winning guess
pub fn print_hint(hint: Feedback) {
    println!("\nYour hints:");
    println!("   black pegs: {}", hint.exact().to_string().bold());
    println!("   white pegs: {}", hint.partial());
    println!();
}

/// Print the re-prompt message for malformed input
pub fn print_invalid(err: &CodeError) {
    println!("{} {err}", "Your input is invalid!".red());
}

/// Print the win banner, graded by how many guesses it took
pub fn print_win(guesses: u32) {
    let message = match guesses {
        1 => "Woohoo! You cracked the code on your first try!".to_string(),
        2..=4 => format!("Nice! You only took {} to crack the code.", tries(guesses)),
        5..=8 => format!("You cracked the code in {guesses} guesses. Good job!"),
        _ => format!("Whew! It took {guesses} guesses, but you cracked the code."),
    };
    println!("\n{}\n", message.bright_green().bold());
}

/// Print the loss message, revealing the secret
pub fn print_loss(secret: &str, final_hint: Feedback) {
    print_hint(final_hint);
    println!(
        "{} {} was the secret code.",
        "Awww, too bad. You ran out of guesses.".red(),
        secret.bright_yellow().bold()
    );
    println!("Better luck next time!\n");
}

/// Print the farewell after an explicit quit
pub fn print_quit() {
    println!("\nThanks for playing!\n");
}

/// Print the secret for debug play
pub fn print_secret_debug(secret: &str) {
    println!(
        "\n{} {}",
        "secret code (for debugging):".bright_black(),
        secret.bright_black()
    );
}

fn tries(guesses: u32) -> String {
    if guesses == 1 {
        format!("{guesses} guess")
    } else {
        format!("{guesses} guesses")
    }
}
