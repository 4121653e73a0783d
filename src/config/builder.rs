//! Configuration builder
//!
//! Merges configuration from files and CLI arguments into `Settings`.

use crate::cli::OutputFormat;
use crate::config::{Config, ConfigFile, Settings};
use crate::domain::StatusColumn;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Builder for merging configuration sources
///
/// Precedence: defaults < config file < CLI flags.
pub struct ConfigBuilder {
    config: Config,
    format: Option<OutputFormat>,
    column: Option<StatusColumn>,
    cwd: Option<PathBuf>,
    git: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            format: None,
            column: None,
            cwd: None,
            git: None,
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// searched and missing files are skipped.
    pub fn with_file(mut self, path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self = self.with_config(cfg);
        }

        Ok(self)
    }

    /// Replace the file configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Override with CLI format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.format = Some(f);
        }
        self
    }

    /// Override with CLI column
    pub fn with_column(mut self, column: Option<StatusColumn>) -> Self {
        if let Some(c) = column {
            self.column = Some(c);
        }
        self
    }

    /// Override with CLI working directory
    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        if let Some(c) = cwd {
            self.cwd = Some(c);
        }
        self
    }

    /// Override with CLI git executable
    pub fn with_git(mut self, git: Option<PathBuf>) -> Self {
        if let Some(g) = git {
            self.git = Some(g);
        }
        self
    }

    /// Build the final settings
    ///
    /// # Errors
    /// Fails on unsupported format or column names from the config file, or
    /// when the current directory cannot be determined.
    pub fn build(self) -> Result<Settings> {
        let format = match self.format {
            Some(f) => f,
            None => self.config.general.output_format()?,
        };

        let column = match self.column {
            Some(c) => c,
            None => self.config.general.status_column()?,
        };

        let cwd = match self.cwd {
            Some(c) => c,
            None => std::env::current_dir()?,
        };

        let git = self
            .git
            .or(self.config.git.path)
            .unwrap_or_else(|| PathBuf::from("git"));

        Ok(Settings {
            format,
            column,
            cwd,
            git,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_builder_defaults() {
        let settings = ConfigBuilder::new().build().unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.column, StatusColumn::Worktree);
        assert_eq!(settings.git, PathBuf::from("git"));
        assert_eq!(settings.cwd, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_builder_overrides() {
        let settings = ConfigBuilder::new()
            .with_format(Some(OutputFormat::Text))
            .with_column(Some(StatusColumn::Index))
            .with_cwd(Some(PathBuf::from("/srv/repo")))
            .with_git(Some(PathBuf::from("/usr/local/bin/git")))
            .build()
            .unwrap();

        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.column, StatusColumn::Index);
        assert_eq!(settings.cwd, PathBuf::from("/srv/repo"));
        assert_eq!(settings.git, PathBuf::from("/usr/local/bin/git"));
    }

    #[test]
    fn test_cli_beats_file() {
        let mut config = Config::default();
        config.general.format = "text".to_string();
        config.git.path = Some(PathBuf::from("/opt/git"));

        let settings = ConfigBuilder::new()
            .with_config(config.clone())
            .build()
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.git, PathBuf::from("/opt/git"));

        let settings = ConfigBuilder::new()
            .with_config(config)
            .with_format(Some(OutputFormat::Json))
            .with_git(None)
            .build()
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.git, PathBuf::from("/opt/git"));
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let mut config = Config::default();
        config.general.column = "both".to_string();

        let result = ConfigBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(AppError::UnsupportedColumn(_))));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_explicit_file_loaded() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nformat = \"text\"\ncolumn = \"index\"").unwrap();

        let settings = ConfigBuilder::new()
            .with_file(Some(file.path()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.column, StatusColumn::Index);
    }
}
