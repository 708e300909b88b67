//! git
//!
//! Runs the external `git` client.
//!
//! # Responsibilities
//!
//! - Spawn the clone command with inherited stdin, stdout and stderr
//! - Wait for it and report how it ended
//!
//! Nothing is retried and a partially cloned directory is left for git or
//! the user to deal with. Credentials are git's business.

use std::ffi::{OsStr, OsString};
use std::io;
use std::process::{Command, ExitStatus};

use log::debug;
use thiserror::Error;

use crate::core::descriptor::CloneCommand;

/// Errors from running git.
#[derive(Debug, Error)]
pub enum GitError {
    /// The program is not on `PATH`.
    #[error("'{program}' not found on PATH")]
    NotFound { program: String },

    /// The program exists but could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    /// The program ran and reported failure.
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

impl GitError {
    /// Exit code to propagate to our own caller.
    ///
    /// Git's own code when it ran and failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitError::Failed { status, .. } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}

/// Run a clone command to completion.
///
/// # Errors
///
/// Returns `GitError::NotFound` if git is not installed and
/// `GitError::Failed` if the clone fails.
pub fn clone(cmd: &CloneCommand) -> Result<(), GitError> {
    run(cmd.program(), cmd.args())
}

fn run(program: &OsStr, args: &[OsString]) -> Result<(), GitError> {
    let name = program.to_string_lossy().into_owned();
    debug!("running {} with {:?}", name, args);

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => GitError::NotFound {
                program: name.clone(),
            },
            _ => GitError::Spawn {
                program: name.clone(),
                source,
            },
        })?;

    debug!("{} finished with {}", name, status);
    if status.success() {
        Ok(())
    } else {
        Err(GitError::Failed {
            program: name,
            status,
        })
    }
}
