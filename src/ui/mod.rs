//! ui
//!
//! User facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity aware printing
//! - [`template`] - `{{ field }}` output templates

pub mod output;
pub mod template;
