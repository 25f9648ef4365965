//! # Archie
//!
//! Fast & easy package management for Arch Linux. Archie is a small
//! interactive front-end that maps single-letter commands onto `yay` or
//! `paru`, offering typo recovery and package-name tab-completion.
//!
//! ## Commands
//!
//! | key | action                                   |
//! |-----|------------------------------------------|
//! | `u` | full system upgrade                      |
//! | `i` | install a package                        |
//! | `r` | remove a package                         |
//! | `p` | remove a package with its dependencies   |
//! | `c` | clean the package cache                  |
//! | `o` | remove orphaned packages                 |
//! | `s` | search for a package                     |
//! | `h` | help                                     |
//! | `q` | quit                                     |
//!
//! ## Example
//!
//! ```no_run
//! use archie::{config::Config, core::resolve_package_manager, utils::ProcessRunner};
//!
//! let config = Config::with_home("/home/alice");
//! let manager = resolve_package_manager(&config, &ProcessRunner::new());
//! println!("Using {:?}", manager);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// `RUST_LOG` wins over the `--debug` flag. Logs go to stderr so they never
/// mix with prompts.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
