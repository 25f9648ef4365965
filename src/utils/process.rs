//! Process execution utilities
//!
//! Every external program archie touches is described as an [`Invocation`]
//! (program plus argument list) and executed directly, never through a shell.

use crate::error::{ArchieError, Result};
use std::{
    fmt,
    path::PathBuf,
    process::{Command, Stdio},
};
use tracing::{debug, instrument};

/// A fully-formed call of an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, looked up on `PATH`
    pub program: String,
    /// Arguments, passed verbatim
    pub args: Vec<String>,
    /// Working directory, inherited when `None`
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    /// Create a new invocation of `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run inside `dir`
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit information of an inherited-stdio run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit status code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Whether the process was successful
    pub success: bool,
}

/// Result of a process execution with captured output
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Whether the process was successful
    pub success: bool,
}

/// Seam between archie and the operating system's process table
///
/// Neither method treats a non-zero exit status as an error; only a failure to
/// start the program is. Callers decide what a status means.
pub trait Runner {
    /// Run with stdin/stdout/stderr inherited from the terminal
    fn run(&self, invocation: &Invocation) -> Result<ProcessStatus>;

    /// Run and capture stdout/stderr
    fn capture(&self, invocation: &Invocation) -> Result<ProcessResult>;

    /// Check if a program is discoverable on `PATH`
    fn command_exists(&self, program: &str) -> bool;
}

/// Utility for running external processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Runner for ProcessRunner {
    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> Result<ProcessStatus> {
        debug!("Running command: {}", invocation);

        let status = invocation
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ArchieError::process(invocation.to_string(), e))?;

        let exit_code = status.code();
        debug!("Command finished: exit_code={:?}", exit_code);

        Ok(ProcessStatus {
            exit_code,
            success: status.success(),
        })
    }

    #[instrument(skip_all, fields(command = %invocation))]
    fn capture(&self, invocation: &Invocation) -> Result<ProcessResult> {
        debug!("Running command with output capture: {}", invocation);

        let output = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ArchieError::process(invocation.to_string(), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let success = output.status.success();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
            success,
        })
    }

    fn command_exists(&self, program: &str) -> bool {
        let exists = which::which(program).is_ok();
        debug!("Command '{}' exists: {}", program, exists);
        exists
    }
}
