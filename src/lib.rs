//! Mastermind
//!
//! A turn-based code-breaking game: the computer draws a secret code of
//! colored pegs, and the player has a fixed budget of guesses, each
//! answered with black pegs (right color, right position) and white pegs
//! (right color, wrong position).
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! // Score a guess against a secret
//! let secret = Code::parse("ROGB", 4).unwrap();
//! let guess = Code::parse("RBGO", 4).unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.exact(), 2); // R and G in position
//! assert_eq!(feedback.partial(), 2); // O and B out of position
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
