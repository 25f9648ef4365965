//! Error types for archie
//!
//! Delegated package-manager runs never produce errors here because their exit
//! status is passed through untouched. These variants cover the front-end's own
//! failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for archie
#[derive(Error, Debug)]
pub enum ArchieError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be started at all
    #[error("Process error: failed to execute {command}")]
    Process {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package list used for tab-completion could not be produced
    #[error("Package index error: {message}")]
    PackageIndex { message: String },

    /// A step of the yay bootstrap sequence failed
    #[error("Bootstrap error: {step} exited with {exit_code:?}")]
    Bootstrap {
        step: String,
        exit_code: Option<i32>,
    },

    /// Input stream kept reporting end-of-file
    #[error("Input closed: no more input after {attempts} attempts")]
    InputClosed { attempts: usize },

    /// Ctrl-C at a prompt
    #[error("Interrupted")]
    Interrupted,

    /// Line editor failures
    #[error("Line editor error")]
    Readline {
        #[source]
        source: rustyline::error::ReadlineError,
    },
}

impl ArchieError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process spawn error
    pub fn process(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            source,
        }
    }

    /// Create a new package index error
    pub fn package_index(message: impl Into<String>) -> Self {
        Self::PackageIndex {
            message: message.into(),
        }
    }

    /// Create a new bootstrap step error
    pub fn bootstrap(step: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Bootstrap {
            step: step.into(),
            exit_code,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ArchieError {
    fn from(source: rustyline::error::ReadlineError) -> Self {
        Self::Readline { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ArchieError>;
