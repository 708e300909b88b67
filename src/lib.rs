//! git-get - clone repositories into a `host/owner/name` workspace layout
//!
//! `git-get` turns a short repository reference such as `owner/name`, a full
//! `https://` URL, or an SCP-style SSH remote into a canonical local path and
//! clone URL, then runs `git clone` into the workspace root.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, picks a mode)
//! - [`core`] - Reference parsing, descriptors, config, workspace listing
//! - [`git`] - Runs the external git client
//! - [`ui`] - Output and templates
//!
//! # Correctness Invariants
//!
//! 1. A reference is resolved by exactly one recognizer, or not at all
//! 2. Every path segment is charset-validated before it touches the filesystem
//! 3. The local path never ends in `.git`; the clone URL always does
//!
//! # Example
//!
//! ```
//! use git_get::core::pattern::resolve;
//! use std::path::Path;
//!
//! let repo = resolve("github.com:takonomura/git-get.git").unwrap();
//! assert_eq!(repo.url, "ssh://github.com:takonomura/git-get.git");
//!
//! let cmd = repo.clone_command(Path::new("/src"));
//! assert_eq!(cmd.program(), "git");
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
