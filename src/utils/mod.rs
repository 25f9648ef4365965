//! Utility modules for common functionality
//!
//! Provides external process execution.

pub mod process;

pub use process::{Invocation, ProcessRunner, Runner};
