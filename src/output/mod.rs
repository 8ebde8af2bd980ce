//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    guess_prompt, print_hint, print_intro, print_invalid, print_loss, print_quit,
    print_secret_debug, print_win,
};
