//! Command dispatch
//!
//! Turns one line of user input into at most one delegated package-manager
//! run. Interactive input gets typo recovery: a line whose first character is
//! a known command asks "did you mean" before running it.

use crate::{
    core::{
        actions,
        command::{Command, help_text},
        input::{Prompt, is_affirmative, read_non_empty},
        manager::PackageManager,
    },
    error::Result,
    utils::process::{Invocation, Runner},
};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Whether the interactive loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Where the operand of a command comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Interactive,
    Argument,
}

/// Maps user input onto package manager invocations
pub struct Dispatcher<P, R, W> {
    manager: PackageManager,
    prompt: P,
    runner: R,
    out: W,
    max_eof: usize,
}

impl<P: Prompt, R: Runner, W: Write> Dispatcher<P, R, W> {
    pub fn new(manager: PackageManager, prompt: P, runner: R, out: W) -> Self {
        Self {
            manager,
            prompt,
            runner,
            out,
            max_eof: 3,
        }
    }

    /// Consecutive end-of-input reads tolerated at any prompt
    #[must_use]
    pub fn with_max_eof(mut self, max_eof: usize) -> Self {
        self.max_eof = max_eof.max(1);
        self
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (P, R, W) {
        (self.prompt, self.runner, self.out)
    }

    /// Prompt with `$ ` until the user quits
    pub fn run_interactive(&mut self) -> Result<()> {
        self.say("Welcome to Archie, type \"h\" for help");
        loop {
            let line = self.read_command_line("$ ", false)?;
            self.prompt.add_history(&line);
            if self.dispatch(&line)? == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }

    /// Handle one interactive line
    ///
    /// Exact single-character commands run directly. Longer input whose first
    /// character is a command asks for confirmation and runs that command on
    /// `y`/`yes`, otherwise shows help. Anything else is rejected with help.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, input: &str) -> Result<Flow> {
        let mut chars = input.chars();
        let first = chars.next();
        let single = chars.next().is_none();

        match first.and_then(Command::from_char) {
            Some(command) if single => self.execute(command, Source::Interactive),
            Some(command) => {
                let question = format!("Did you mean \"{command}\"? (y/n): ");
                let answer = self.read_command_line(&question, false)?;
                if is_affirmative(&answer) {
                    debug!("Confirmed '{}' for input '{}'", command, input);
                    self.execute(command, Source::Interactive)
                } else {
                    self.show_help();
                    Ok(Flow::Continue)
                }
            }
            None => {
                self.say("Invalid input. Please input a valid command.");
                self.show_help();
                Ok(Flow::Continue)
            }
        }
    }

    /// Handle a command given with `--exec`, exact match only
    #[instrument(skip(self))]
    pub fn dispatch_from_argument(&mut self, argument: &str) -> Result<()> {
        match Command::from_argument(argument) {
            Some(command) => {
                self.execute(command, Source::Argument)?;
            }
            None => self.say(&format!("Invalid command for --exec: {argument}")),
        }
        Ok(())
    }

    /// Ask once for the `--exec` command, then run it
    pub fn prompt_and_dispatch_argument(&mut self) -> Result<()> {
        let command =
            self.read_command_line("Enter command to execute (u, i, r, p, c, o, s, h): ", false)?;
        self.dispatch_from_argument(&command)
    }

    /// Read a non-empty line
    pub fn read_command_line(&mut self, prompt: &str, complete: bool) -> Result<String> {
        read_non_empty(&mut self.prompt, &mut self.out, prompt, complete, self.max_eof)
    }

    fn execute(&mut self, command: Command, source: Source) -> Result<Flow> {
        debug!("Executing command '{}' via {}", command, self.manager);
        let manager = self.manager;

        let operand = match command.operand() {
            Some(operand) => {
                let complete = operand.completes && source == Source::Interactive;
                self.read_operand(operand.text, complete)?
            }
            None => Vec::new(),
        };

        match command {
            Command::Update => self.delegate(&actions::upgrade(manager)),
            Command::Install => self.delegate(&actions::install(manager, &operand)),
            Command::Remove => self.delegate(&actions::remove(manager, &operand)),
            Command::Purge => self.delegate(&actions::purge(manager, &operand)),
            Command::CleanCache => self.delegate(&actions::clean_cache(manager)),
            Command::CleanOrphans => self.clean_orphans(),
            Command::Search => self.delegate(&actions::search(manager, &operand)),
            Command::Help => self.show_help(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read package names or a query; blank input is asked for again
    fn read_operand(&mut self, prompt: &str, complete: bool) -> Result<Vec<String>> {
        loop {
            let text = self.read_command_line(prompt, complete)?;
            let operand = actions::split_operand(&text);
            if !operand.is_empty() {
                return Ok(operand);
            }
            self.say("Please input something, not air.");
        }
    }

    /// List orphans first, then remove them; nothing to remove skips the call
    fn clean_orphans(&mut self) {
        let listing = actions::list_orphans();
        let orphans = match self.runner.capture(&listing) {
            Ok(result) => actions::parse_package_lines(&result.stdout),
            Err(e) => {
                warn!("{}", e);
                self.say(&e.to_string());
                return;
            }
        };

        if orphans.is_empty() {
            self.say("No orphaned packages to remove.");
            return;
        }
        self.delegate(&actions::remove_orphans(self.manager, &orphans));
    }

    /// Run a package manager command; its exit status is the user's to read
    fn delegate(&mut self, invocation: &Invocation) {
        match self.runner.run(invocation) {
            Ok(status) => debug!("{} exited with {:?}", invocation, status.exit_code),
            Err(e) => {
                warn!("{}", e);
                self.say(&e.to_string());
            }
        }
    }

    fn show_help(&mut self) {
        let _ = write!(self.out, "{}", help_text());
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }
}
