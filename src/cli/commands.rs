//! Top-level execution of the parsed command line

use crate::{
    cli::{Args, LinePrompt, Mode},
    config::Config,
    core::{
        BootstrapOutcome, CompletionIndex, Dispatcher, bootstrap_if_missing,
        command::usage_text,
        manager::{PackageManager, package_manager_version, version_banner},
        resolve_package_manager,
    },
    error::ArchieError,
    utils::process::ProcessRunner,
};
use anyhow::Context;
use std::{io, process::ExitCode};
use tracing::{debug, instrument};

/// Exit code used when a prompt is interrupted with Ctrl-C
const INTERRUPTED_EXIT: u8 = 130;

/// Execute the mode selected by the command line
#[instrument(skip(args))]
pub fn execute(args: &Args) -> anyhow::Result<ExitCode> {
    let mode = args.mode();
    debug!("Mode: {:?}", mode);

    let result = match mode {
        Mode::Help => {
            print!("{}", usage_text());
            Ok(ExitCode::SUCCESS)
        }
        Mode::Version => load_config(args)
            .and_then(|config| execute_version(&config, &ProcessRunner::new())),
        Mode::Exec(command) => load_config(args).and_then(|config| {
            execute_exec(&config, ProcessRunner::new(), command.as_deref())
        }),
        Mode::Interactive => load_config(args)
            .and_then(|config| execute_interactive(&config, ProcessRunner::new())),
    };

    match result {
        Err(e) if matches!(e.downcast_ref::<ArchieError>(), Some(ArchieError::Interrupted)) => {
            Ok(ExitCode::from(INTERRUPTED_EXIT))
        }
        other => other,
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    Config::from_args(args).context("Failed to load configuration")
}

fn execute_version(config: &Config, runner: &ProcessRunner) -> anyhow::Result<ExitCode> {
    let manager = resolve_package_manager(config, runner);
    let version = package_manager_version(manager, runner);
    print!("{}", version_banner(manager, &version));
    Ok(ExitCode::SUCCESS)
}

fn execute_exec(
    config: &Config,
    runner: ProcessRunner,
    command: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let manager = match resolve_package_manager(config, &runner) {
        Some(manager) => manager,
        None => return run_bootstrap(config, &runner),
    };

    let prompt = LinePrompt::without_completion().context("Failed to open terminal")?;
    let mut dispatcher = dispatcher(config, manager, prompt, runner);
    match command {
        Some(command) => dispatcher.dispatch_from_argument(command)?,
        None => dispatcher.prompt_and_dispatch_argument()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn execute_interactive(config: &Config, runner: ProcessRunner) -> anyhow::Result<ExitCode> {
    let manager = match resolve_package_manager(config, &runner) {
        Some(manager) => manager,
        None => return run_bootstrap(config, &runner),
    };

    let index = CompletionIndex::new(runner.clone());
    let prompt = LinePrompt::new(index).context("Failed to open terminal")?;
    dispatcher(config, manager, prompt, runner).run_interactive()?;
    Ok(ExitCode::SUCCESS)
}

fn dispatcher(
    config: &Config,
    manager: PackageManager,
    prompt: LinePrompt,
    runner: ProcessRunner,
) -> Dispatcher<LinePrompt, ProcessRunner, io::Stdout> {
    Dispatcher::new(manager, prompt, runner, io::stdout()).with_max_eof(config.max_eof_retries)
}

/// No package manager: offer yay, then stop either way
fn run_bootstrap(config: &Config, runner: &ProcessRunner) -> anyhow::Result<ExitCode> {
    let mut prompt = LinePrompt::without_completion().context("Failed to open terminal")?;
    let outcome = bootstrap_if_missing(config, &mut prompt, runner, &mut io::stdout())
        .context("Failed to install yay")?;

    Ok(ExitCode::from(bootstrap_exit_status(outcome)))
}

/// The requested command never ran, so both outcomes end unsuccessfully
const fn bootstrap_exit_status(outcome: BootstrapOutcome) -> u8 {
    match outcome {
        BootstrapOutcome::Installed | BootstrapOutcome::Declined => 1,
    }
}
