//! cli
//!
//! Command-line interface layer for git-get.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Set up logging
//! - Delegate to the mode handlers in [`commands`]
//! - Map failures to a process exit code
//!
//! The CLI layer is thin. Parsing references and building clone commands
//! happens in [`crate::core`]; running git happens in [`crate::git`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::env;
use anyhow::Result;
use env_logger::Builder;

use crate::git::GitError;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    initialize_logging(verbosity);

    commands::dispatch(cli, verbosity)
}

/// Exit code for a failed run.
///
/// A failed clone exits with git's own code; everything else with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<GitError>()
        .map(GitError::exit_code)
        .unwrap_or(1);

    u8::try_from(code).unwrap_or(1)
}

/// Route `log` records to stderr.
///
/// `--debug` and `--quiet` pick the level for this crate; `RUST_LOG`, when
/// set, overrides it.
fn initialize_logging(verbosity: Verbosity) {
    let mut builder = Builder::new();
    builder
        .filter_module("git_get", verbosity.log_filter())
        .format_timestamp(None)
        .format_target(false);

    if let Ok(filter) = env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }

    // Only fails when a logger is already installed.
    let _ = builder.try_init();
}
