//! Core functionality for archie
//!
//! Command alphabet, package manager detection, dispatch of user input onto
//! package manager invocations, tab-completion and the yay bootstrap.

pub mod actions;
pub mod bootstrap;
pub mod command;
pub mod completion;
pub mod dispatch;
pub mod input;
pub mod manager;

pub use bootstrap::{BootstrapOutcome, bootstrap_if_missing};
pub use command::Command;
pub use completion::{CompletionIndex, PackageCompleter};
pub use dispatch::{Dispatcher, Flow};
pub use input::Prompt;
pub use manager::{PackageManager, resolve_package_manager};
