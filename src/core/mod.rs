//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear combinatorial
//! properties.

mod code;
mod feedback;
mod symbol;

pub use code::{Code, CodeError};
pub use feedback::Feedback;
pub use symbol::Symbol;
