//! core::workspace
//!
//! Finds repositories that are already cloned under the workspace root.
//!
//! A directory containing a `.git` entry (a directory, or a file for
//! worktrees and submodules) is a repository. It is reported and never
//! descended into. The walk stops `level` directories below the root and
//! visits entries in file-name order, so output is stable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors from walking the workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to walk '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to inspect '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// A repository found under the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoEntry {
    /// Path relative to the workspace root
    pub path: PathBuf,
    /// Absolute path
    pub abs: PathBuf,
}

/// Iterate over the repositories under `root`, at most `level` deep.
///
/// # Example
///
/// ```no_run
/// use git_get::core::workspace::repositories;
/// use std::path::Path;
///
/// for repo in repositories(Path::new("/home/u/src"), 3) {
///     println!("{}", repo.unwrap().path.display());
/// }
/// ```
pub fn repositories(root: &Path, level: usize) -> Repositories {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(level)
        .sort_by_file_name()
        .into_iter();

    Repositories {
        root: root.to_path_buf(),
        walker,
    }
}

/// Iterator returned by [`repositories`].
pub struct Repositories {
    root: PathBuf,
    walker: walkdir::IntoIter,
}

impl Iterator for Repositories {
    type Item = Result<RepoEntry, WorkspaceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source.path().unwrap_or(&self.root).to_path_buf();
                    return Some(Err(WorkspaceError::Walk { path, source }));
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            if entry.file_name() == ".git" {
                self.walker.skip_current_dir();
                continue;
            }

            let marker = entry.path().join(".git");
            match fs::symlink_metadata(&marker) {
                Ok(_) => {
                    self.walker.skip_current_dir();
                    let abs = entry.path().to_path_buf();
                    let path = abs.strip_prefix(&self.root).unwrap_or(&abs).to_path_buf();
                    return Some(Ok(RepoEntry { path, abs }));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Some(Err(WorkspaceError::Io {
                        path: marker,
                        source,
                    }))
                }
            }
        }
    }
}
