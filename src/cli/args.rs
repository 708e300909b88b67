//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Modes
//!
//! Exactly one mode runs, checked in this order:
//! - `--completions <shell>`: print a completion script
//! - `--root`: print the workspace root
//! - `--list` / `-l`: list cloned repositories
//! - `<REPO>`: resolve and clone (or just print with `--print`)

use clap::{Parser, ValueEnum};

use crate::core::types::BranchName;

/// Clone repositories into a host/owner/name workspace layout
#[derive(Parser, Debug)]
#[command(name = "git-get")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Clone github.com/takonomura/git-get into $GITPATH
    git-get takonomura/git-get

    # Same thing, from a full URL or an SSH remote
    git-get https://github.com/takonomura/git-get.git
    git-get git@github.com:takonomura/git-get.git

    # Show the command without running it
    git-get --print takonomura/git-get

    # cd into a clone
    cd \"$(git-get -p -o '{{ abs }}' takonomura/git-get)\"

    # List everything that is cloned
    git-get --list -o '{{ abs }}'

WORKSPACE ROOT:
    $GITPATH, then `root` in the config file, then $GOPATH/src, then $HOME/src.")]
pub struct Cli {
    /// Repository to clone: owner/name, host/owner/name, an https:// URL,
    /// or an SSH remote such as git@host:owner/name.git
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// Branch to clone
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<BranchName>,

    /// Print the clone command instead of running it
    #[arg(short, long)]
    pub print: bool,

    /// List cloned repositories
    #[arg(short, long, conflicts_with_all = ["repo", "print", "branch"])]
    pub list: bool,

    /// Descend only this many directories deep when listing
    #[arg(short = 'L', long, value_name = "N",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub level: Option<u32>,

    /// Print the workspace root
    #[arg(long, conflicts_with_all = ["repo", "list", "print", "branch"])]
    pub root: bool,

    /// Output template, e.g. '{{ abs }}'
    #[arg(short, long, value_name = "TEMPLATE")]
    pub output: Option<String>,

    /// Print JSON instead of the output template
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Print a shell completion script
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
