//
//  onesky-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module loads the CLI's optional settings from a TOML file stored in a
//! platform-specific directory. Credentials are never read from this file; they come
//! from the command line or the `ONESKY_API_KEY` / `ONESKY_API_SECRET` environment
//! variables.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/onesky/config.toml`
//! - **macOS**: `~/Library/Application Support/onesky/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\onesky\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! api_url = "https://platform.api.onesky.io/1/"
//! download_dir = "/home/me/translations"
//! timeout_secs = 60
//! prompt = "enabled"
//! ```
//!
//! ## Precedence
//!
//! Command-line flags override file values, which override built-in defaults.
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Global configuration container for the OneSky CLI.
///
/// # Examples
///
/// ```rust
/// use onesky_cli::config::Config;
///
/// let config = Config::default();
/// assert!(config.prompt_enabled());
/// assert!(config.core.api_url.is_none());
/// ```
///
/// # Notes
///
/// - All fields use `#[serde(default)]`, so a partial file is valid
/// - A missing file is not an error; defaults are used
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Core CLI configuration options.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core configuration options.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `api_url` | `None` (the public platform URL) |
/// | `download_dir` | `None` (the current directory) |
/// | `timeout_secs` | `None` (no timeout) |
/// | `prompt` | `"enabled"` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Base URL of the platform API. Relative endpoint paths are appended to it
    /// verbatim, so it should end with `/`.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Directory that exported translation files are written to.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Total per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Confirmation prompts before destructive commands.
    ///
    /// # Valid Values
    ///
    /// - `"enabled"` - Ask before deleting (default)
    /// - `"disabled"` - Never ask
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Returns the default prompt setting value.
fn default_prompt() -> String {
    "enabled".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            download_dir: None,
            timeout_secs: None,
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or the
    /// file exists but is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path. A missing file yields the
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use onesky_cli::config::Config;
    ///
    /// let config = Config::load_from(Path::new("onesky.toml"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Checks whether destructive commands should ask for confirmation.
    pub fn prompt_enabled(&self) -> bool {
        self.core.prompt != "disabled"
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.core.timeout_secs.map(Duration::from_secs)
    }
}
