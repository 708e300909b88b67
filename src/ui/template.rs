//! ui::template
//!
//! User configurable output templates.
//!
//! A template is literal text with `{{ field }}` placeholders. Whitespace
//! inside the braces is ignored.
//!
//! | Field    | Value                                          |
//! |----------|------------------------------------------------|
//! | `path`   | Path relative to the workspace root (also `.`) |
//! | `abs`    | Absolute path                                  |
//! | `root`   | Workspace root                                 |
//! | `url`    | Clone URL                                      |
//! | `branch` | Branch override, empty if none                 |
//! | `cmd`    | The clone command line                         |
//!
//! `url`, `branch` and `cmd` only exist for a resolved repository, not for
//! entries produced by `--list`.
//!
//! # Example
//!
//! ```
//! use git_get::core::descriptor::RepositoryDescriptor;
//! use git_get::ui::template::{RepoContext, Template};
//! use std::path::Path;
//!
//! let repo = RepositoryDescriptor::new("github.com/a/b", "https://github.com/a/b.git");
//! let ctx = RepoContext::new(&repo, Path::new("/src"));
//!
//! let template = Template::parse("clone {{ url }} -> {{path}}").unwrap();
//! assert_eq!(
//!     template.render(&ctx).unwrap(),
//!     "clone https://github.com/a/b.git -> github.com/a/b"
//! );
//! ```

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::core::descriptor::RepositoryDescriptor;
use crate::core::workspace::RepoEntry;

/// Template used by `--list`.
pub const LIST_TEMPLATE: &str = "{{ path }}";
/// Template used by `--print`.
pub const PRINT_TEMPLATE: &str = "{{ cmd }}";
/// Template printed before cloning.
pub const CLONE_TEMPLATE: &str = "$ {{ cmd }}";

/// Errors from parsing or rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated '{{{{' at byte {0}")]
    Unterminated(usize),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is not available here")]
    Unavailable(Field),
}

/// A placeholder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Abs,
    Root,
    Url,
    Branch,
    Cmd,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        let field = match name {
            "path" | "." => Field::Path,
            "abs" => Field::Abs,
            "root" => Field::Root,
            "url" => Field::Url,
            "branch" => Field::Branch,
            "cmd" => Field::Cmd,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Path => "path",
            Field::Abs => "abs",
            Field::Root => "root",
            Field::Url => "url",
            Field::Branch => "branch",
            Field::Cmd => "cmd",
        };
        f.write_str(s)
    }
}

/// Supplies field values while rendering.
pub trait TemplateContext {
    /// Value of `field`, or `None` if this context does not have it.
    fn field(&self, field: Field) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Field(Field),
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parse a template.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated `{{` or an unknown field name.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut pieces = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                pieces.push(Piece::Text(rest[..open].to_string()));
            }

            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or(TemplateError::Unterminated(source.len() - rest.len() + open))?;

            let name = after[..close].trim();
            let field =
                Field::parse(name).ok_or_else(|| TemplateError::UnknownField(name.to_string()))?;
            pieces.push(Piece::Field(field));

            rest = &after[close + 2..];
        }

        if !rest.is_empty() {
            pieces.push(Piece::Text(rest.to_string()));
        }

        Ok(Self { pieces })
    }

    /// Render the template against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Unavailable` if the template uses a field
    /// the context does not provide.
    pub fn render(&self, ctx: &dyn TemplateContext) -> Result<String, TemplateError> {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Field(field) => {
                    let value = ctx.field(*field).ok_or(TemplateError::Unavailable(*field))?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

/// Fields of a resolved repository.
pub struct RepoContext<'a> {
    repo: &'a RepositoryDescriptor,
    root: &'a Path,
}

impl<'a> RepoContext<'a> {
    pub fn new(repo: &'a RepositoryDescriptor, root: &'a Path) -> Self {
        Self { repo, root }
    }
}

impl TemplateContext for RepoContext<'_> {
    fn field(&self, field: Field) -> Option<String> {
        let value = match field {
            Field::Path => self.repo.path.display().to_string(),
            Field::Abs => self.repo.destination(self.root).display().to_string(),
            Field::Root => self.root.display().to_string(),
            Field::Url => self.repo.url.clone(),
            Field::Branch => self
                .repo
                .branch
                .as_ref()
                .map(|b| b.to_string())
                .unwrap_or_default(),
            Field::Cmd => self.repo.clone_command(self.root).to_string(),
        };
        Some(value)
    }
}

/// Fields of a listed repository.
pub struct EntryContext<'a> {
    entry: &'a RepoEntry,
    root: &'a Path,
}

impl<'a> EntryContext<'a> {
    pub fn new(entry: &'a RepoEntry, root: &'a Path) -> Self {
        Self { entry, root }
    }
}

impl TemplateContext for EntryContext<'_> {
    fn field(&self, field: Field) -> Option<String> {
        match field {
            Field::Path => Some(self.entry.path.display().to_string()),
            Field::Abs => Some(self.entry.abs.display().to_string()),
            Field::Root => Some(self.root.display().to_string()),
            Field::Url | Field::Branch | Field::Cmd => None,
        }
    }
}
