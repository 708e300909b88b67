//! cli::commands
//!
//! Mode dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Parses its output template before doing any work
//! 2. Calls into [`crate::core`] for the actual logic
//! 3. Formats and displays output
//!
//! The workspace root is resolved once, before any handler runs. Failing to
//! find one is fatal.

mod completion;
mod get;
mod list;
mod root;

pub use completion::completion;
pub use get::{get, GetArgs};
pub use list::list;
pub use root::root;

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::CommandFactory;
use log::debug;

use crate::cli::args::Cli;
use crate::core::config::{Config, Environment};
use crate::ui::output::Verbosity;
use crate::ui::template::Template;

/// Execution context shared by all handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved workspace root.
    pub root: PathBuf,
    /// Loaded configuration.
    pub config: Config,
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Template given with `--output`, overriding config and defaults.
    pub output: Option<String>,
    /// Print JSON instead of rendering a template.
    pub json: bool,
}

impl Context {
    /// Pick and parse the template for a mode.
    ///
    /// `--output` wins over the configured template, which wins over the
    /// mode's default.
    fn template(&self, configured: Option<&str>, default: &str) -> Result<Template> {
        let source = self.output.as_deref().or(configured).unwrap_or(default);
        Template::parse(source).with_context(|| format!("Invalid output template '{source}'"))
    }
}

/// Dispatch the parsed command line to its handler.
pub fn dispatch(cli: Cli, verbosity: Verbosity) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completion(shell);
    }

    let env = Environment::from_process();
    let config = Config::load(&env).context("Failed to load config")?;
    let root = config.workspace_root(&env)?;
    debug!("workspace root is {}", root.display());

    let level = cli
        .level
        .map(|level| level as usize)
        .unwrap_or_else(|| config.level());

    let ctx = Context {
        root,
        config,
        verbosity,
        output: cli.output,
        json: cli.json,
    };

    if cli.root {
        return root::root(&ctx);
    }

    if cli.list {
        return list::list(&ctx, level);
    }

    let Some(repo) = cli.repo else {
        bail!(
            "missing repository argument\n\n{}",
            Cli::command().render_usage()
        );
    };

    get::get(
        &ctx,
        GetArgs {
            repo,
            branch: cli.branch,
            print: cli.print,
        },
    )
}
