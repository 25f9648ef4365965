//! Package manager detection
//!
//! archie never talks to libalpm itself; it picks one AUR helper per run and
//! hands every operation to it.

use crate::{
    config::Config,
    utils::process::{Invocation, Runner},
};
use std::fmt;
use tracing::{debug, instrument};

/// Supported AUR helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yay,
    Paru,
}

impl PackageManager {
    /// Binary name on `PATH`
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Yay => "yay",
            Self::Paru => "paru",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Pick the package manager for this run
///
/// The paru sentinel wins regardless of what is installed; otherwise yay is
/// preferred over paru. `None` means neither is available.
#[instrument(skip_all)]
pub fn resolve_package_manager<R: Runner>(config: &Config, runner: &R) -> Option<PackageManager> {
    let sentinel = config.sentinel_path();
    let resolved = if sentinel.exists() {
        debug!("Found {}, using paru", sentinel.display());
        Some(PackageManager::Paru)
    } else if runner.command_exists("yay") {
        Some(PackageManager::Yay)
    } else if runner.command_exists("paru") {
        Some(PackageManager::Paru)
    } else {
        None
    };

    debug!("Resolved package manager: {:?}", resolved);
    resolved
}

/// Self-reported version of `manager`, `"unknown"` if it cannot be read
///
/// Both helpers print `<name> <version> - libalpm ...`; the token after the
/// name is the version.
pub fn package_manager_version<R: Runner>(manager: Option<PackageManager>, runner: &R) -> String {
    const UNKNOWN: &str = "unknown";

    let Some(manager) = manager else {
        return UNKNOWN.to_string();
    };

    let invocation = Invocation::new(manager.binary()).arg("--version");
    match runner.capture(&invocation) {
        Ok(result) => parse_version(&result.stdout).unwrap_or(UNKNOWN).to_string(),
        Err(e) => {
            debug!("Could not query {} version: {}", manager, e);
            UNKNOWN.to_string()
        }
    }
}

fn parse_version(output: &str) -> Option<&str> {
    output.lines().next()?.split_whitespace().nth(1)
}

/// The `--version` banner
pub fn version_banner(manager: Option<PackageManager>, manager_version: &str) -> String {
    let name = manager.map_or("none", PackageManager::binary);
    format!(
        "    __     Archie v{version} - Fast & easy package management for Arch Linux\n \
         .:--.'.   Written in Rust, powered by YAY and Pacman.\n\
         / |   \\ |  {name} {manager_version}\n\
         `\" __ | |  \n \
         .'.''| |  \n\
         / /   | |_ This program may be freely redistributed under the terms of the GNU General Public License.\n\
         \\ \\._,\\ '/ Created & maintained by Gurov\n \
         `--'  `\"  With the help of scklss and Keiran\n",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ArchieError, Result},
        utils::process::{ProcessResult, ProcessStatus},
    };

    struct FakeRunner {
        installed: Vec<&'static str>,
        version_output: Option<&'static str>,
    }

    impl FakeRunner {
        fn with(installed: &[&'static str]) -> Self {
            Self {
                installed: installed.to_vec(),
                version_output: None,
            }
        }
    }

    impl Runner for FakeRunner {
        fn run(&self, _invocation: &Invocation) -> Result<ProcessStatus> {
            unreachable!("detection never runs programs")
        }

        fn capture(&self, invocation: &Invocation) -> Result<ProcessResult> {
            match self.version_output {
                Some(stdout) => Ok(ProcessResult {
                    exit_code: Some(0),
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                    success: true,
                }),
                None => Err(ArchieError::process(
                    invocation.to_string(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )),
            }
        }

        fn command_exists(&self, program: &str) -> bool {
            self.installed.contains(&program)
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config::with_home(dir.path())
    }

    #[test]
    fn test_sentinel_selects_paru() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(".archie-use-paru"), b"").unwrap();
        let config = config_in(&home);

        for installed in [&["yay"][..], &["yay", "paru"], &[]] {
            let runner = FakeRunner::with(installed);
            assert_eq!(
                resolve_package_manager(&config, &runner),
                Some(PackageManager::Paru)
            );
        }
    }

    #[test]
    fn test_yay_preferred_without_sentinel() {
        let home = tempfile::tempdir().unwrap();
        let config = config_in(&home);

        let runner = FakeRunner::with(&["paru", "yay"]);
        assert_eq!(
            resolve_package_manager(&config, &runner),
            Some(PackageManager::Yay)
        );

        let runner = FakeRunner::with(&["paru"]);
        assert_eq!(
            resolve_package_manager(&config, &runner),
            Some(PackageManager::Paru)
        );
    }

    #[test]
    fn test_none_when_nothing_available() {
        let home = tempfile::tempdir().unwrap();
        let runner = FakeRunner::with(&["pacman", "git"]);
        assert_eq!(resolve_package_manager(&config_in(&home), &runner), None);
    }

    #[test]
    fn test_version_token() {
        let runner = FakeRunner {
            installed: vec!["yay"],
            version_output: Some("yay v12.3.5 - libalpm v14.0.0\n"),
        };
        assert_eq!(
            package_manager_version(Some(PackageManager::Yay), &runner),
            "v12.3.5"
        );
    }

    #[test]
    fn test_version_unknown() {
        let runner = FakeRunner::with(&[]);
        assert_eq!(package_manager_version(None, &runner), "unknown");
        assert_eq!(
            package_manager_version(Some(PackageManager::Paru), &runner),
            "unknown"
        );

        let runner = FakeRunner {
            installed: vec![],
            version_output: Some(""),
        };
        assert_eq!(
            package_manager_version(Some(PackageManager::Paru), &runner),
            "unknown"
        );
    }

    #[test]
    fn test_banner_mentions_manager() {
        let banner = version_banner(Some(PackageManager::Paru), "v2.0.3");
        assert!(banner.contains("paru v2.0.3"));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));

        let banner = version_banner(None, "unknown");
        assert!(banner.contains("none unknown"));
    }
}
