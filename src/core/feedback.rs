//! Guess feedback calculation
//!
//! Feedback counts exact matches (black pegs: right symbol, right position)
//! and partial matches (white pegs: right symbol, wrong position). The
//! two-pass algorithm claims each position for at most one match, so a
//! duplicated symbol is never credited twice.

use super::Code;

/// Feedback for one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    exact: usize,
    partial: usize,
}

impl Feedback {
    /// Build a feedback value directly from peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Number of exact matches (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of partial matches (white pegs)
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Whether every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Score `guess` against `secret`
    ///
    /// Two strict passes; the first must finish before the second starts so
    /// an exactly-matched position is never also counted as partial.
    ///
    /// 1. Exact pass: aligned positions with equal symbols are counted and
    ///    claimed on both sides.
    /// 2. Partial pass: every unclaimed secret position is matched against
    ///    every unclaimed guess position; a match is counted and claims both
    ///    positions immediately, so each position feeds at most one peg.
    ///
    /// The scan order of the partial pass (secret-outer, guess-inner) only
    /// decides which of several duplicate positions gets claimed, never the
    /// counts. Claim flags are locals, so scoring the same pair repeatedly
    /// always yields the same result.
    ///
    /// Both codes must have the same length; the game engine guarantees
    /// this, since every accepted guess was validated against the config.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("ROGB", 4).unwrap();
    /// let guess = Code::parse("BGOR", 4).unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // Every color present, none in position
    /// assert_eq!(feedback.exact(), 0);
    /// assert_eq!(feedback.partial(), 4);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len());
        let len = secret.len();

        let mut secret_claimed = vec![false; len];
        let mut guess_claimed = vec![false; len];

        // First pass: exact matches on aligned positions
        let mut exact = 0;
        for i in 0..len {
            if secret.symbols()[i] == guess.symbols()[i] {
                exact += 1;
                secret_claimed[i] = true;
                guess_claimed[i] = true;
            }
        }

        // Second pass: partial matches over the remaining cross-product
        let mut partial = 0;
        for i in 0..len {
            if secret_claimed[i] {
                continue;
            }
            for j in 0..len {
                if !guess_claimed[j] && secret.symbols()[i] == guess.symbols()[j] {
                    partial += 1;
                    secret_claimed[i] = true;
                    guess_claimed[j] = true;
                    break;
                }
            }
        }

        Self { exact, partial }
    }
}
