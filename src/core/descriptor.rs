//! core::descriptor
//!
//! The canonical description of a repository and the clone command built
//! from it.
//!
//! # Lifecycle
//!
//! A [`RepositoryDescriptor`] is produced once per invocation by the
//! [`PatternEngine`](crate::core::pattern::PatternEngine), optionally given a
//! branch override, and then consumed to build a [`CloneCommand`] or a
//! display string.
//!
//! # Invariants
//!
//! - `path` and `url` name the same host, owner, and repository
//! - `path` never ends in `.git`; `url` always does
//! - `branch` is only ever set by an explicit override
//!
//! # Example
//!
//! ```
//! use git_get::core::descriptor::RepositoryDescriptor;
//! use std::path::Path;
//!
//! let repo = RepositoryDescriptor::new("github.com/a/b", "https://github.com/a/b.git");
//! let cmd = repo.clone_command(Path::new("/home/u/src"));
//!
//! assert_eq!(
//!     cmd.to_string(),
//!     "git clone --recursive https://github.com/a/b.git /home/u/src/github.com/a/b"
//! );
//! ```

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::types::BranchName;

/// Where a repository lives on disk and where it is cloned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    /// Path relative to the workspace root, `<host>/<owner>/<name>`,
    /// using the platform's separators.
    pub path: PathBuf,

    /// Fully qualified clone URL ending in `.git`.
    pub url: String,

    /// Branch to check out; `None` means the remote default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchName>,
}

impl RepositoryDescriptor {
    /// Create a descriptor with no branch override.
    pub fn new(path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
            branch: None,
        }
    }

    /// Override the branch to clone.
    ///
    /// Passing `None` keeps whatever branch is already set.
    pub fn with_branch(mut self, branch: Option<BranchName>) -> Self {
        if branch.is_some() {
            self.branch = branch;
        }
        self
    }

    /// Absolute destination of the clone under `root`.
    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }

    /// Build the `git clone` invocation for this repository.
    ///
    /// Nothing is checked on disk; git creates missing parent directories.
    pub fn clone_command(&self, root: &Path) -> CloneCommand {
        let mut tokens: Vec<OsString> = vec![
            "git".into(),
            "clone".into(),
            "--recursive".into(),
            self.url.clone().into(),
            self.destination(root).into_os_string(),
        ];

        if let Some(branch) = &self.branch {
            tokens.push("-b".into());
            tokens.push(branch.as_str().into());
        }

        CloneCommand { tokens }
    }
}

/// An ordered `git clone` command line.
///
/// The first token is the program, the rest are its arguments. `Display`
/// joins the tokens with single spaces and does no shell quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneCommand {
    tokens: Vec<OsString>,
}

impl CloneCommand {
    /// All tokens, program first.
    pub fn tokens(&self) -> &[OsString] {
        &self.tokens
    }

    /// The program to run.
    pub fn program(&self) -> &OsStr {
        &self.tokens[0]
    }

    /// The arguments passed to the program.
    pub fn args(&self) -> &[OsString] {
        &self.tokens[1..]
    }
}

impl fmt::Display for CloneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token.to_string_lossy())?;
        }
        Ok(())
    }
}
