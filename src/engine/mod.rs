//! Game session engine
//!
//! Owns the secret, drives the guess/feedback loop, and decides the
//! terminal outcome. All I/O stays with the caller.

mod config;
mod game;

pub use config::{DEFAULT_CODE_LENGTH, DEFAULT_MAX_GUESSES, GameConfig};
pub use game::{Game, QUIT_TOKEN, TurnResult};
