#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use archie::{cli, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Run the selected mode
    cli::execute(&args)
}
