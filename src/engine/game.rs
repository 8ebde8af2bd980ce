//! Game session state machine
//!
//! A Game owns the secret code and a guess counter, and advances one turn
//! per submitted input. Terminal outcomes are returned values; the engine
//! never reads input or ends the process itself.

use super::GameConfig;
use crate::core::{Code, CodeError, Feedback};
use rand::Rng;

/// Input that ends the session early, matched case-insensitively
pub const QUIT_TOKEN: &str = "exit";

/// Result of submitting one line of input to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// Input failed validation; no guess was consumed
    Invalid(CodeError),
    /// A valid, non-winning guess and its pegs
    Hint(Feedback),
    /// The guess matched the secret; carries the number of guesses taken
    Won(u32),
    /// The guess budget ran out; carries the revealed secret and the pegs
    /// for the final guess
    Lost { secret: String, final_hint: Feedback },
    /// The player asked to stop; no guess was consumed
    Quit,
}

impl TurnResult {
    /// Whether this result ends the game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost { .. } | Self::Quit)
    }
}

/// One game session: a secret, a guess counter, and a terminal outcome
pub struct Game {
    config: GameConfig,
    secret: Code,
    guesses: u32,
    outcome: Option<TurnResult>,
}

impl Game {
    /// Start a session with a secret drawn from `rng`
    #[must_use]
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let secret = Code::random(config.code_length, rng);
        Self::with_secret(config, secret)
    }

    /// Start a session with a known secret
    ///
    /// The secret's length overrides nothing: it must already match
    /// `config.code_length`, which `Code::random` and `Code::parse` both
    /// guarantee.
    #[must_use]
    pub const fn with_secret(config: GameConfig, secret: Code) -> Self {
        Self {
            config,
            secret,
            guesses: 0,
            outcome: None,
        }
    }

    /// Submit one line of player input and advance the state machine
    ///
    /// Transition rules:
    /// - the quit token ends the game without consuming a guess;
    /// - malformed input returns [`TurnResult::Invalid`] and changes
    ///   nothing, so the caller can re-prompt;
    /// - a guess equal to the secret wins;
    /// - any other valid guess consumes a turn and yields pegs, or loses
    ///   the game if it was the last one in the budget.
    ///
    /// Once the game is over, further calls return the terminal result
    /// again without touching any state.
    pub fn submit(&mut self, raw_input: &str) -> TurnResult {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let input = raw_input.trim();
        if input.eq_ignore_ascii_case(QUIT_TOKEN) {
            return self.finish(TurnResult::Quit);
        }

        let guess = match Code::parse(input, self.config.code_length) {
            Ok(guess) => guess,
            Err(err) => return TurnResult::Invalid(err),
        };

        self.guesses += 1;

        if guess == self.secret {
            return self.finish(TurnResult::Won(self.guesses));
        }

        let hint = Feedback::score(&self.secret, &guess);
        if self.guesses >= self.config.max_guesses {
            return self.finish(TurnResult::Lost {
                secret: self.secret.to_string(),
                final_hint: hint,
            });
        }

        TurnResult::Hint(hint)
    }

    /// Whether a terminal outcome has been reached
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of valid guesses consumed so far
    #[must_use]
    pub const fn guesses_taken(&self) -> u32 {
        self.guesses
    }

    /// The secret's symbols as text, for debug display
    #[must_use]
    pub fn reveal_secret(&self) -> String {
        self.secret.to_string()
    }

    /// The session configuration
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    fn finish(&mut self, outcome: TurnResult) -> TurnResult {
        self.outcome = Some(outcome.clone());
        outcome
    }
}
