//! Command-line interface module
//!
//! Provides argument parsing, the terminal prompt and top-level execution.

pub mod args;
pub mod commands;
pub mod prompt;

pub use args::{Args, Mode, parse_args};
pub use commands::execute;
pub use prompt::LinePrompt;
