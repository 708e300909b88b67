//! core::config
//!
//! Configuration loading and workspace root resolution.
//!
//! # Workspace Root
//!
//! The directory repositories are cloned into is resolved in this order:
//! 1. `$GITPATH`
//! 2. `root` from the config file
//! 3. `$GOPATH/src` (first entry when `GOPATH` is a list)
//! 4. `$HOME/src`
//!
//! Relative values from the first three sources are taken relative to the
//! home directory. Empty environment variables count as unset.
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. `$GIT_GET_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-get/config.toml`
//! 3. `~/.git-get/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```
//! use git_get::core::config::{Config, Environment};
//! use std::path::PathBuf;
//!
//! let env = Environment {
//!     home: Some(PathBuf::from("/home/u")),
//!     ..Default::default()
//! };
//! let config = Config::default();
//!
//! assert_eq!(config.workspace_root(&env).unwrap(), PathBuf::from("/home/u/src"));
//! assert_eq!(config.level(), 3);
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Listing depth used when neither the flag nor the config sets one.
pub const DEFAULT_LEVEL: usize = 3;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("no workspace root found. Please set $GITPATH")]
    NoWorkspaceRoot,
}

/// The environment variables configuration depends on.
///
/// Captured once so resolution is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `$GITPATH`
    pub gitpath: Option<OsString>,
    /// `$GOPATH`
    pub gopath: Option<OsString>,
    /// `$HOME`, falling back to the platform home directory
    pub home: Option<PathBuf>,
    /// `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// `$GIT_GET_CONFIG`
    pub config_file: Option<PathBuf>,
}

impl Environment {
    /// Read the current process environment.
    pub fn from_process() -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());

        Self {
            gitpath: var("GITPATH"),
            gopath: var("GOPATH"),
            home: var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
            xdg_config_home: var("XDG_CONFIG_HOME").map(PathBuf::from),
            config_file: var("GIT_GET_CONFIG").map(PathBuf::from),
        }
    }

    /// Anchor a relative path at the home directory.
    fn absolute(&self, path: PathBuf) -> PathBuf {
        match &self.home {
            Some(home) if path.is_relative() => home.join(path),
            _ => path,
        }
    }
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the first existing config file.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(env: &Environment) -> Result<Config, ConfigError> {
        let Some(path) = Self::locate(env) else {
            debug!("no config file found, using defaults");
            return Ok(Config::default());
        };

        debug!("loading config from {}", path.display());
        let global = Self::read(&path)?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path),
        })
    }

    /// Find the config file to load, if any.
    fn locate(env: &Environment) -> Option<PathBuf> {
        let candidates = [
            env.config_file.clone(),
            env.xdg_config_home
                .as_ref()
                .map(|xdg| xdg.join("git-get/config.toml")),
            env.home.as_ref().map(|home| home.join(".git-get/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Path of the loaded config file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Listing depth.
    ///
    /// Defaults to [`DEFAULT_LEVEL`] if not configured.
    pub fn level(&self) -> usize {
        self.global.level.unwrap_or(DEFAULT_LEVEL)
    }

    /// Configured output template for `--print` and cloning, if any.
    pub fn output(&self) -> Option<&str> {
        self.global.output.as_deref()
    }

    /// Configured output template for `--list`, if any.
    pub fn list_output(&self) -> Option<&str> {
        self.global.list_output.as_deref()
    }

    /// Resolve the workspace root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoWorkspaceRoot` when no source yields a path.
    pub fn workspace_root(&self, env: &Environment) -> Result<PathBuf, ConfigError> {
        if let Some(gitpath) = &env.gitpath {
            return Ok(env.absolute(PathBuf::from(gitpath)));
        }

        if let Some(root) = &self.global.root {
            return Ok(env.absolute(root.clone()));
        }

        if let Some(gopath) = &env.gopath {
            if let Some(first) = std::env::split_paths(gopath).find(|p| !p.as_os_str().is_empty())
            {
                return Ok(env.absolute(first.join("src")));
            }
        }

        env.home
            .as_ref()
            .map(|home| home.join("src"))
            .ok_or(ConfigError::NoWorkspaceRoot)
    }
}
