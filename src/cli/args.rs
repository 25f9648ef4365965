//! Command-line argument parsing

use clap::Parser;

/// Archie - Fast & easy package management for Arch Linux
///
/// clap's built-in `-h`/`-V` handling is disabled: `-H` prints archie's own
/// usage text and `-V` prints the banner with the package manager version.
#[derive(Parser, Debug)]
#[command(name = "archie", about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Print usage information
    #[arg(short = 'H', long = "help")]
    pub help: bool,

    /// Print version information
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Execute a single command and exit, prompting for it when omitted
    #[arg(short = 'E', long = "exec", value_name = "COMMAND", num_args = 0..=1)]
    pub exec: Option<Option<String>>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    Version,
    Exec(Option<String>),
    Interactive,
}

impl Args {
    /// Resolve flags into a single mode, first match wins
    pub fn mode(&self) -> Mode {
        if self.version {
            Mode::Version
        } else if let Some(command) = &self.exec {
            Mode::Exec(command.clone())
        } else if self.help {
            Mode::Help
        } else {
            Mode::Interactive
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
