//! Configuration management for archie
//!
//! Everything here is derived from the command line and the environment once
//! per run and treated as read-only afterwards.

use crate::{cli::Args, error::ArchieError};
use std::{
    env,
    io::{self, IsTerminal},
    path::PathBuf,
    time::Duration,
};

/// Marker file whose presence selects paru over yay
pub const PARU_SENTINEL: &str = ".archie-use-paru";

/// AUR repository of the prebuilt yay package
pub const YAY_BIN_REPO: &str = "https://aur.archlinux.org/yay-bin.git";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// User home directory
    pub home: PathBuf,
    /// Bootstrap configuration
    pub bootstrap: BootstrapConfig,
    /// Consecutive end-of-input reads tolerated before giving up
    pub max_eof_retries: usize,
}

/// Settings for installing yay when no package manager is found
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Scratch directory removed after a successful bootstrap
    pub cache_dir: PathBuf,
    /// Git URL of the package to build
    pub repo_url: String,
    /// Pause between the missing-manager notice and the question
    pub notice_delay: Duration,
}

impl Config {
    /// Create configuration from command line arguments and `HOME`
    pub fn from_args(args: &Args) -> Result<Self, ArchieError> {
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ArchieError::config("HOME is not set"))?;

        let mut config = Self::with_home(home);
        config.debug = args.debug;
        if io::stdin().is_terminal() {
            config.bootstrap.notice_delay = Duration::from_secs(3);
        }
        Ok(config)
    }

    /// Build the default configuration rooted at `home`
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            debug: false,
            bootstrap: BootstrapConfig {
                cache_dir: home.join(".cache").join("archie"),
                repo_url: YAY_BIN_REPO.to_string(),
                notice_delay: Duration::ZERO,
            },
            home,
            max_eof_retries: 3,
        }
    }

    /// Path of the paru preference marker
    pub fn sentinel_path(&self) -> PathBuf {
        self.home.join(PARU_SENTINEL)
    }
}
