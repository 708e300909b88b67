//! get - Resolve a repository reference and clone it
//!
//! # Flow
//!
//! 1. Resolve the reference with the default [`PatternEngine`]
//! 2. Apply the `--branch` override
//! 3. Render the output template (or JSON)
//! 4. Unless `--print` was given, run `git clone`
//!
//! # Example
//!
//! ```bash
//! git-get takonomura/git-get
//! git-get -b dev git@github.com:takonomura/git-get.git
//! git-get -p -o '{{ abs }}' takonomura/git-get
//! ```

use anyhow::{bail, Context as _, Result};
use log::debug;

use super::Context;
use crate::core::pattern::PatternEngine;
use crate::core::types::BranchName;
use crate::git;
use crate::ui::output;
use crate::ui::template::{RepoContext, CLONE_TEMPLATE, PRINT_TEMPLATE};

/// Arguments of the get mode.
#[derive(Debug, Clone)]
pub struct GetArgs {
    /// Reference as typed by the user.
    pub repo: String,
    /// Branch override.
    pub branch: Option<BranchName>,
    /// Only print, do not clone.
    pub print: bool,
}

pub fn get(ctx: &Context, args: GetArgs) -> Result<()> {
    let template = if args.print {
        ctx.template(ctx.config.output(), PRINT_TEMPLATE)?
    } else {
        ctx.template(ctx.config.output(), CLONE_TEMPLATE)?
    };

    let Some(repo) = PatternEngine::default().resolve(&args.repo) else {
        bail!("Cannot parse specified repository: {}", args.repo);
    };
    let repo = repo.with_branch(args.branch);

    if ctx.json {
        output::json(&repo).context("Failed to write output")?;
    } else {
        let line = template.render(&RepoContext::new(&repo, &ctx.root))?;
        if args.print {
            output::data(line).context("Failed to write output")?;
        } else {
            output::print(line, ctx.verbosity);
        }
    }

    if args.print {
        return Ok(());
    }

    let dest = repo.destination(&ctx.root);
    if dest.exists() {
        output::warn(
            format!("{} already exists", dest.display()),
            ctx.verbosity,
        );
    }

    debug!("cloning {} into {}", repo.url, dest.display());
    git::clone(&repo.clone_command(&ctx.root)).context("Failed to clone the repository")
}
