//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::OutputFormat;
use crate::domain::StatusColumn;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Git executable settings
    pub git: GitConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Output format name (json, text)
    pub format: String,
    /// Status column to group by (worktree, index)
    pub column: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            column: "worktree".to_string(),
        }
    }
}

impl GeneralConfig {
    /// Validate the format name
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// Validate the column name
    pub fn status_column(&self) -> Result<StatusColumn> {
        self.column.parse()
    }
}

/// Git executable configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable; `PATH` lookup when unset
    pub path: Option<PathBuf>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub column: StatusColumn,
    /// Repository directory passed to `git -C`
    pub cwd: PathBuf,
    /// Git executable
    pub git: PathBuf,
}
