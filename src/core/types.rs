//! core::types
//!
//! Strong types for the identifiers that make up a repository reference.
//!
//! # Types
//!
//! - [`Segment`] - One validated host, owner, name, or path component
//! - [`SshUser`] - The user part of an SCP-style reference
//! - [`BranchName`] - Validated branch name for the `--branch` override
//!
//! # Validation
//!
//! These types enforce validity at construction time. A recognizer that
//! cannot build every segment of its input simply does not match, so
//! malformed identifiers never reach the filesystem or the git command line.
//!
//! # Examples
//!
//! ```
//! use git_get::core::types::{BranchName, Segment, SegmentKind};
//!
//! let owner = Segment::new(SegmentKind::Owner, "takonomura").unwrap();
//! assert_eq!(owner.as_str(), "takonomura");
//!
//! assert!(Segment::new(SegmentKind::Name, "has space").is_err());
//! assert!(Segment::new(SegmentKind::Name, "..").is_err());
//! assert!(BranchName::new("invalid..name").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidSegment {
        kind: SegmentKind,
        value: String,
        reason: &'static str,
    },

    #[error("invalid ssh user '{0}'")]
    InvalidUser(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}

/// Which part of a reference a [`Segment`] was parsed from.
///
/// Only used to make validation errors readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Host,
    Owner,
    Name,
    Path,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SegmentKind::Host => "host",
            SegmentKind::Owner => "owner",
            SegmentKind::Name => "name",
            SegmentKind::Path => "path segment",
        };
        f.write_str(s)
    }
}

/// Characters allowed in any host, owner, name, or path segment.
fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// A single validated component of a repository reference.
///
/// A segment:
/// - Is not empty
/// - Contains only ASCII alphanumerics, `-`, `_`, and `.`
/// - Is not made up of dots alone (`.` and `..` would escape the workspace)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    /// Create a new validated segment.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidSegment` naming `kind` when the value
    /// breaks one of the rules above.
    pub fn new(kind: SegmentKind, value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if !value.chars().all(is_segment_char) {
            Some("only letters, digits, '-', '_' and '.' are allowed")
        } else if value.chars().all(|c| c == '.') {
            Some("must not consist of dots only")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(TypeError::InvalidSegment {
                kind,
                value,
                reason,
            }),
            None => Ok(Self(value)),
        }
    }

    /// Get the segment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `user` in `user@host:path.git`.
///
/// Lowercase ASCII letters, digits, and `_`; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SshUser(String);

impl SshUser {
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(Self(value))
        } else {
            Err(TypeError::InvalidUser(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SshUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Git branch name.
///
/// Follows the rules of `git check-ref-format --branch`:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `-`
/// - Cannot end with `/` or `.lock`
/// - Cannot contain `..`, `@{`, `//`, ASCII control characters, or any of
///   `` ~^:\?*[`` and space
/// - No `/`-separated component may start with `.` or end with `.lock`
///
/// # Example
///
/// ```
/// use git_get::core::types::BranchName;
///
/// let name = BranchName::new("release/1.0").unwrap();
/// assert_eq!(name.as_str(), "release/1.0");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("-b").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if let Some(reason) = Self::violation(&name) {
            return Err(TypeError::InvalidBranchName(format!("'{name}' {reason}")));
        }
        Ok(Self(name))
    }

    fn violation(name: &str) -> Option<&'static str> {
        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];

        if name.is_empty() {
            return Some("is empty");
        }
        if name == "@" {
            return Some("is reserved");
        }
        // A leading dash would be read by git as another option.
        if name.starts_with('-') {
            return Some("cannot start with '-'");
        }
        if name.ends_with('/') || name.ends_with(".lock") {
            return Some("cannot end with '/' or '.lock'");
        }
        if name.contains("..") || name.contains("@{") || name.contains("//") {
            return Some("cannot contain '..', '@{' or '//'");
        }
        if name
            .chars()
            .any(|c| c.is_ascii_control() || INVALID_CHARS.contains(&c))
        {
            return Some("contains a forbidden character");
        }
        if name
            .split('/')
            .any(|part| part.starts_with('.') || part.ends_with(".lock"))
        {
            return Some("has a component starting with '.' or ending with '.lock'");
        }
        None
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BranchName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod segment {
        use super::*;

        #[test]
        fn accepts_restricted_charset() {
            for value in ["github.com", "git-get", "my_repo", "R2D2", "a.b-c_d"] {
                assert!(Segment::new(SegmentKind::Name, value).is_ok(), "{value}");
            }
        }

        #[test]
        fn rejects_empty() {
            assert!(Segment::new(SegmentKind::Owner, "").is_err());
        }

        #[test]
        fn rejects_foreign_characters() {
            for value in ["a b", "a:b", "a/b", "a@b", "caf\u{e9}", "a\\b"] {
                assert!(Segment::new(SegmentKind::Owner, value).is_err(), "{value}");
            }
        }

        #[test]
        fn rejects_dot_only_segments() {
            assert!(Segment::new(SegmentKind::Path, ".").is_err());
            assert!(Segment::new(SegmentKind::Path, "..").is_err());
            assert!(Segment::new(SegmentKind::Path, ".dotfiles").is_ok());
        }

        #[test]
        fn error_names_the_kind() {
            let err = Segment::new(SegmentKind::Host, "bad host").unwrap_err();
            assert!(err.to_string().starts_with("invalid host 'bad host'"));
        }
    }

    mod ssh_user {
        use super::*;

        #[test]
        fn lowercase_user_accepted() {
            assert_eq!(SshUser::new("git").unwrap().as_str(), "git");
            assert!(SshUser::new("deploy_01").is_ok());
        }

        #[test]
        fn other_users_rejected() {
            assert!(SshUser::new("").is_err());
            assert!(SshUser::new("Git").is_err());
            assert!(SshUser::new("a-b").is_err());
        }
    }

    mod branch_name {
        use super::*;

        #[test]
        fn valid_branch_names() {
            assert!(BranchName::new("main").is_ok());
            assert!(BranchName::new("feature/foo").is_ok());
            assert!(BranchName::new("user@feature").is_ok());
            assert!(BranchName::new("v1.2.3").is_ok());
        }

        #[test]
        fn invalid_branch_names() {
            for name in [
                "",
                "@",
                "-b",
                "branch/",
                "branch.lock",
                "bad..path",
                "foo@{bar",
                "foo//bar",
                "has space",
                "tilde~1",
                "foo/.hidden",
            ] {
                assert!(BranchName::new(name).is_err(), "{name:?}");
            }
        }

        #[test]
        fn parses_from_str() {
            let name: BranchName = "dev".parse().unwrap();
            assert_eq!(name.to_string(), "dev");
        }
    }
}
