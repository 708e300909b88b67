//! core::pattern
//!
//! Turns a user supplied repository reference into a
//! [`RepositoryDescriptor`].
//!
//! # Recognizers
//!
//! The [`PatternEngine`] holds an ordered list of [`Recognizer`]s and returns
//! the result of the first one that accepts the input. The default engine
//! registers, in order:
//!
//! 1. [`HttpsRecognizer`] - `[https://][host/]owner/name[.git][/]`
//! 2. [`ScpRecognizer`] - `[ssh://][user@]host:path.git`
//!
//! The two grammars are disjoint: the HTTPS form never contains a `:`
//! outside its scheme prefix, and the SCP form requires one between host
//! and path. Reordering them does not change any result.
//!
//! # Example
//!
//! ```
//! use git_get::core::pattern::PatternEngine;
//! use std::path::Path;
//!
//! let engine = PatternEngine::default();
//!
//! let repo = engine.resolve("takonomura/git-get").unwrap();
//! assert_eq!(repo.path, Path::new("github.com/takonomura/git-get"));
//! assert_eq!(repo.url, "https://github.com/takonomura/git-get.git");
//!
//! let repo = engine.resolve("git@github.com:takonomura/git-get.git").unwrap();
//! assert_eq!(repo.url, "ssh://git@github.com:takonomura/git-get.git");
//!
//! assert!(engine.resolve("takonomura").is_none());
//! ```

use std::fmt;
use std::path::PathBuf;

use log::{debug, trace};
use thiserror::Error;

use crate::core::descriptor::RepositoryDescriptor;
use crate::core::types::{Segment, SegmentKind, SshUser, TypeError};

/// Host used when a shorthand reference has no host segment.
pub const DEFAULT_HOST: &str = "github.com";

/// Why a recognizer did not accept an input.
///
/// Rejections are not errors: the engine moves on to the next recognizer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0}")]
    Shape(&'static str),

    #[error(transparent)]
    Invalid(#[from] TypeError),
}

/// One grammar plus the extraction of a descriptor from it.
pub trait Recognizer: fmt::Debug + Send + Sync {
    /// Short name used in debug output.
    fn name(&self) -> &'static str;

    /// Accept `input` and derive its descriptor, or explain the rejection.
    fn recognize(&self, input: &str) -> Result<RepositoryDescriptor, Rejection>;
}

/// Ordered, first-match-wins list of recognizers.
#[derive(Debug)]
pub struct PatternEngine {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new(vec![Box::new(HttpsRecognizer), Box::new(ScpRecognizer)])
    }
}

impl PatternEngine {
    /// Build an engine that tries `recognizers` in the given order.
    pub fn new(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    /// Names of the registered recognizers, in priority order.
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Resolve `input` with the first recognizer that accepts it.
    ///
    /// Returns `None` when no recognizer matches.
    pub fn resolve(&self, input: &str) -> Option<RepositoryDescriptor> {
        for recognizer in &self.recognizers {
            match recognizer.recognize(input) {
                Ok(repo) => {
                    debug!(
                        "{:?} matched the {} form: path={}, url={}",
                        input,
                        recognizer.name(),
                        repo.path.display(),
                        repo.url
                    );
                    return Some(repo);
                }
                Err(rejection) => {
                    trace!("{} form rejected {:?}: {}", recognizer.name(), input, rejection);
                }
            }
        }
        None
    }
}

/// Resolve `input` with the default engine.
pub fn resolve(input: &str) -> Option<RepositoryDescriptor> {
    PatternEngine::default().resolve(input)
}

/// Remove every trailing `.git`, as long as something is left.
fn trim_git_suffixes(mut s: &str) -> &str {
    while let Some(stripped) = s.strip_suffix(".git") {
        if stripped.is_empty() {
            break;
        }
        s = stripped;
    }
    s
}

/// `[https://][host/]owner/name[.git][/]`
///
/// Without a host the repository is assumed to live on [`DEFAULT_HOST`].
/// With the `https://` prefix the host is mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsRecognizer;

impl Recognizer for HttpsRecognizer {
    fn name(&self) -> &'static str {
        "https"
    }

    fn recognize(&self, input: &str) -> Result<RepositoryDescriptor, Rejection> {
        let (has_scheme, rest) = match input.strip_prefix("https://") {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        let parts: Vec<&str> = rest.split('/').collect();
        let (host, owner, name) = match parts.as_slice() {
            [owner, name] if !has_scheme => (DEFAULT_HOST, *owner, *name),
            [host, owner, name] => (*host, *owner, *name),
            [_, _] => return Err(Rejection::Shape("an https:// url needs host/owner/name")),
            _ => return Err(Rejection::Shape("expected [host/]owner/name")),
        };

        let name = trim_git_suffixes(name);
        if name.ends_with(".git") {
            return Err(Rejection::Shape("repository name is missing"));
        }

        let host = Segment::new(SegmentKind::Host, host)?;
        let owner = Segment::new(SegmentKind::Owner, owner)?;
        let name = Segment::new(SegmentKind::Name, name)?;

        let path: PathBuf = [host.as_str(), owner.as_str(), name.as_str()]
            .iter()
            .collect();
        let url = format!("https://{host}/{owner}/{name}.git");

        Ok(RepositoryDescriptor::new(path, url))
    }
}

/// `[ssh://][user@]host:path.git`
///
/// The path may have any number of segments and may start with `/` for an
/// absolute path on the remote. The URL keeps the colon between host and
/// path, exactly like the SCP syntax git understands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScpRecognizer;

impl Recognizer for ScpRecognizer {
    fn name(&self) -> &'static str {
        "ssh"
    }

    fn recognize(&self, input: &str) -> Result<RepositoryDescriptor, Rejection> {
        let rest = input.strip_prefix("ssh://").unwrap_or(input);

        let (authority, remote_path) = rest
            .split_once(':')
            .ok_or(Rejection::Shape("expected host:path"))?;

        let (user, host) = match authority.split_once('@') {
            Some((user, host)) => (Some(SshUser::new(user)?), host),
            None => (None, authority),
        };
        let host = Segment::new(SegmentKind::Host, host)?;

        let remote_path = remote_path
            .strip_suffix(".git")
            .ok_or(Rejection::Shape("an ssh path must end in .git"))?;
        let remote_path = trim_git_suffixes(remote_path);

        let relative = remote_path.strip_prefix('/').unwrap_or(remote_path);
        let segments = relative
            .split('/')
            .map(|s| Segment::new(SegmentKind::Path, s))
            .collect::<Result<Vec<_>, _>>()?;

        if segments
            .last()
            .is_some_and(|last| last.as_str().ends_with(".git"))
        {
            return Err(Rejection::Shape("repository name is missing"));
        }

        let mut path = PathBuf::from(host.as_str());
        path.extend(segments.iter().map(Segment::as_str));

        let url = match user {
            Some(user) => format!("ssh://{user}@{host}:{remote_path}.git"),
            None => format!("ssh://{host}:{remote_path}.git"),
        };

        Ok(RepositoryDescriptor::new(path, url))
    }
}
