//! core
//!
//! Core domain types and logic for git-get.
//!
//! # Modules
//!
//! - [`types`] - Validated segments, SSH users and branch names
//! - [`pattern`] - Ordered recognizers that parse repository references
//! - [`descriptor`] - Repository descriptor and clone command
//! - [`config`] - Configuration file and workspace root resolution
//! - [`workspace`] - Listing repositories under the workspace root
//!
//! # Design Principles
//!
//! - Parsing and command building are pure and perform no I/O
//! - Invalid identifiers are rejected at construction time
//! - "No match" is an answer, not an error

pub mod config;
pub mod descriptor;
pub mod pattern;
pub mod types;
pub mod workspace;
