//! First-run installation of yay
//!
//! Only reached when neither yay nor paru is on `PATH`. The sequence runs at
//! most once and stops at the first failing step.

use crate::{
    config::Config,
    core::input::{Prompt, is_affirmative, read_non_empty},
    error::{ArchieError, Result},
    utils::process::{Invocation, Runner},
};
use std::{fs, io::Write, path::Path, thread};
use tracing::{info, instrument};

/// How the bootstrap ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// yay was built and installed; the user must restart archie
    Installed,
    /// The user said no
    Declined,
}

/// Offer to install yay and do so on confirmation
#[instrument(skip_all)]
pub fn bootstrap_if_missing<P, R, W>(
    config: &Config,
    prompt: &mut P,
    runner: &R,
    out: &mut W,
) -> Result<BootstrapOutcome>
where
    P: Prompt + ?Sized,
    R: Runner,
    W: Write,
{
    let _ = writeln!(out, "Error: Neither yay nor paru is installed.");
    if !config.bootstrap.notice_delay.is_zero() {
        thread::sleep(config.bootstrap.notice_delay);
    }
    let answer = read_non_empty(
        prompt,
        out,
        "Do you want to install yay? (y/n): ",
        false,
        config.max_eof_retries,
    )?;

    if !is_affirmative(&answer) {
        let _ = writeln!(out, "Exiting the program.");
        return Ok(BootstrapOutcome::Declined);
    }

    if !runner.command_exists("git") {
        let _ = writeln!(out, "Installing git...");
        run_step(
            runner,
            &Invocation::new("sudo").args(["pacman", "-S", "--noconfirm", "git"]),
        )?;
    }

    let _ = writeln!(out, "Installing yay...");
    install_yay(config, runner)?;
    let _ = writeln!(
        out,
        "Installation of yay is complete. Please restart your shell and relaunch the script."
    );
    Ok(BootstrapOutcome::Installed)
}

fn install_yay<R: Runner>(config: &Config, runner: &R) -> Result<()> {
    let cache_dir = &config.bootstrap.cache_dir;
    let build_root = cache_dir.join("build");
    let checkout = build_root.join("yay-bin");

    remove_dir_if_exists(&checkout)?;
    fs::create_dir_all(&build_root)
        .map_err(|e| ArchieError::file_system("create directory", &build_root, e))?;

    run_step(
        runner,
        &Invocation::new("git")
            .arg("clone")
            .arg(&config.bootstrap.repo_url)
            .arg(checkout.to_string_lossy()),
    )?;
    run_step(
        runner,
        &Invocation::new("makepkg").arg("-scCi").current_dir(&checkout),
    )?;

    remove_dir_if_exists(cache_dir)?;
    info!("yay installed");
    Ok(())
}

fn run_step<R: Runner>(runner: &R, invocation: &Invocation) -> Result<()> {
    info!("+ {}", invocation);
    let status = runner.run(invocation)?;
    if status.success {
        Ok(())
    } else {
        Err(ArchieError::bootstrap(invocation.to_string(), status.exit_code))
    }
}

fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ArchieError::file_system("remove directory", path, e)),
    }
}
