//! Game session configuration

/// Default number of symbols in a code
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Default guess budget per game
pub const DEFAULT_MAX_GUESSES: u32 = 10;

/// Immutable configuration for one game session
///
/// The symbol alphabet is fixed at compile time; only the code length and
/// the guess budget vary per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub code_length: usize,
    pub max_guesses: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}
