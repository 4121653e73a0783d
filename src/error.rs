//! Unified error types for git-status-json
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from running the git executable
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Error from parsing porcelain output
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from configuration loading
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output format name that is neither json nor text
    #[error("Illegal format: \"{given}\" (allowed formats: {allowed})")]
    UnsupportedFormat { given: String, allowed: String },

    /// Status column name that is neither worktree nor index
    #[error("Illegal column: \"{0}\" (allowed columns: worktree, index)")]
    UnsupportedColumn(String),

    /// IO error (stdout writes, current directory lookup)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from invoking the git executable
#[derive(Error, Debug)]
pub enum GitError {
    /// The executable could not be spawned
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("git exited with {}: {stderr}", describe_exit(.code))]
    ExitStatus { code: Option<i32>, stderr: String },
}

impl GitError {
    /// True when the executable itself was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// True when git complained that the directory is not a repository
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, GitError::ExitStatus { stderr, .. } if stderr.contains("not a git repository"))
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "signal".to_string(),
    }
}

/// Errors from porcelain record parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Record too short or missing the separator after the status code
    #[error("malformed status record: {0:?}")]
    MalformedRecord(String),

    /// Rename or copy record without the following source path
    #[error("rename/copy record for {0:?} has no original path")]
    MissingOriginalPath(String),

    /// Status letter outside the porcelain v1 alphabet
    #[error("unknown status code {0:?}")]
    UnknownStatusCode(char),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = AppError::UnsupportedFormat {
            given: "xml".to_string(),
            allowed: "json, text".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Illegal format: \"xml\" (allowed formats: json, text)"
        );
    }

    #[test]
    fn test_exit_status_display() {
        let err = GitError::ExitStatus {
            code: Some(128),
            stderr: "fatal: not a git repository".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git exited with status 128: fatal: not a git repository"
        );
        assert!(err.is_not_a_repository());
    }

    #[test]
    fn test_spawn_not_found() {
        let err = GitError::Spawn {
            program: PathBuf::from("/nonexistent/git"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/nonexistent/git"));
    }

    #[test]
    fn test_error_conversion() {
        let parse_err = ParseError::UnknownStatusCode('Z');
        let app_err: AppError = parse_err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }
}
