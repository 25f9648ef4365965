//! End-to-end tests driving the `archie` binary against fake AUR helpers

use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, os::unix::fs::PermissionsExt};
use tempfile::TempDir;

/// A throwaway `HOME` plus a `PATH` holding only the tools a test installs
struct Sandbox {
    home: TempDir,
    bin: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            bin: tempfile::tempdir().unwrap(),
        }
    }

    /// Install a helper that reports its version and echoes its arguments
    fn with_tool(self, name: &str, version: &str) -> Self {
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n\
             \x20 echo \"{name} {version} - libalpm v14.0.0\"\n\
             \x20 exit 0\n\
             fi\n\
             echo \"{name} called: $*\"\n"
        );
        let path = self.bin.path().join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    fn prefer_paru(self) -> Self {
        fs::write(self.home.path().join(".archie-use-paru"), b"").unwrap();
        self
    }

    fn archie(&self) -> Command {
        let mut cmd = Command::cargo_bin("archie").unwrap();
        cmd.env("HOME", self.home.path())
            .env("PATH", self.bin.path())
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn help_prints_usage() {
    let sandbox = Sandbox::new();
    for flag in ["--help", "-H"] {
        sandbox
            .archie()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Usage:"))
            .stdout(predicate::str::contains(
                "archie {-E --exec} s (search for a package)",
            ));
    }
}

#[test]
fn unknown_flag_is_rejected() {
    Sandbox::new().archie().arg("--nope").assert().code(2);
}

#[test]
fn version_reports_yay() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("yay v12.3.5"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_reports_paru_with_sentinel() {
    let sandbox = Sandbox::new()
        .with_tool("yay", "v12.3.5")
        .with_tool("paru", "v2.0.3")
        .prefer_paru();
    sandbox
        .archie()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paru v2.0.3"));
}

#[test]
fn version_without_manager() {
    Sandbox::new()
        .archie()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("none unknown"));
}

#[test]
fn exec_update_delegates_once() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .args(["--exec", "u"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yay called: -Syu --noconfirm").count(1));
}

#[test]
fn exec_search_reads_operand() {
    let sandbox = Sandbox::new().with_tool("paru", "v2.0.3");
    sandbox
        .archie()
        .args(["-E", "s"])
        .write_stdin("foo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("paru called: foo"));
}

#[test]
fn exec_prompts_for_missing_command() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .arg("-E")
        .write_stdin("c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("yay called: -Sc --noconfirm"));
}

#[test]
fn exec_rejects_unknown_command() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .args(["-E", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command for --exec: x"))
        .stdout(predicate::str::contains("called").not());
}

#[test]
fn missing_manager_and_declined_bootstrap_exits_1() {
    let sandbox = Sandbox::new();
    sandbox
        .archie()
        .args(["-E", "u"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Neither yay nor paru is installed.",
        ))
        .stdout(predicate::str::contains("Exiting the program."));
}

#[test]
fn interactive_update_then_quit() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .write_stdin("u\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Archie"))
        .stdout(predicate::str::contains("yay called: -Syu --noconfirm").count(1));
}

#[test]
fn interactive_invalid_input_shows_help() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please input a valid command.",
        ))
        .stdout(predicate::str::contains("q - Quit"))
        .stdout(predicate::str::contains("called").not());
}

#[test]
fn interactive_rejected_typo_shows_help() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .write_stdin("ii\nn\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available options are:"))
        .stdout(predicate::str::contains("called").not());
}

#[test]
fn interactive_confirmed_typo_runs_command() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .write_stdin("install\ny\nhtop btop\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("yay called: -S htop btop"));
}

#[test]
fn interactive_closed_input_fails() {
    let sandbox = Sandbox::new().with_tool("yay", "v12.3.5");
    sandbox
        .archie()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));
}
