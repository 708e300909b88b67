//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$GIT_GET_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-get/config.toml`
//! 3. `~/.git-get/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing: the listing depth must be positive
//! and both output templates must parse.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::ui::template::Template;

/// User configuration.
///
/// # Example
///
/// ```toml
/// root = "code"          # relative paths are taken from $HOME
/// level = 3
/// output = "{{ abs }}"
/// list_output = "{{ abs }}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Workspace root used when `$GITPATH` is not set
    pub root: Option<PathBuf>,

    /// How many directories deep `--list` looks for repositories
    pub level: Option<usize>,

    /// Default output template for `--print` and cloning
    pub output: Option<String>,

    /// Default output template for `--list`
    pub list_output: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level == Some(0) {
            return Err(ConfigError::InvalidValue(
                "level must be at least 1".to_string(),
            ));
        }

        for (key, value) in [("output", &self.output), ("list_output", &self.list_output)] {
            if let Some(source) = value {
                Template::parse(source).map_err(|e| {
                    ConfigError::InvalidValue(format!("invalid {key} template: {e}"))
                })?;
            }
        }

        Ok(())
    }
}
