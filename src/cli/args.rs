//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments.

use crate::domain::StatusColumn;
use crate::error::AppError;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use std::str::FromStr;

/// Group git status output by file state
///
/// Runs `git status --porcelain=v1 -z` and prints the changed files grouped
/// by status category as JSON or aligned plaintext.
#[derive(Parser, Debug)]
#[command(name = "git-status-json")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, env = "GIT_STATUS_JSON_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to Git repository (Example: /home/user/myrepository)
    #[arg(short, long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Path to Git executable (Example: /usr/bin/git)
    #[arg(short, long, value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Status column to group by
    #[arg(long, value_enum)]
    pub column: Option<ColumnArg>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", env = "GIT_STATUS_JSON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// One aligned `label: "file", ...` line per category
    Text,
}

impl OutputFormat {
    /// Names accepted on the command line and in config files
    pub fn allowed() -> String {
        Self::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| AppError::UnsupportedFormat {
            given: s.to_string(),
            allowed: Self::allowed(),
        })
    }
}

/// Status column argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnArg {
    /// Working tree state (second status letter)
    Worktree,
    /// Staged state (first status letter)
    Index,
}

impl From<ColumnArg> for StatusColumn {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Worktree => StatusColumn::Worktree,
            ColumnArg::Index => StatusColumn::Index,
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let args = Cli::try_parse_from(["git-status-json"]).unwrap();
        assert!(args.cwd.is_none());
        assert!(args.git.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_parse_format() {
        let args = Cli::try_parse_from(["git-status-json", "--format", "text"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Text));

        let args = Cli::try_parse_from(["git-status-json", "-f", "json"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unsupported_format() {
        let result = Cli::try_parse_from(["git-status-json", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_paths() {
        let args = Cli::try_parse_from([
            "git-status-json",
            "--cwd",
            "/home/user/repo",
            "-g",
            "/usr/bin/git",
        ])
        .unwrap();
        assert_eq!(args.cwd, Some(PathBuf::from("/home/user/repo")));
        assert_eq!(args.git, Some(PathBuf::from("/usr/bin/git")));
    }

    #[test]
    fn test_cli_parse_column() {
        let args = Cli::try_parse_from(["git-status-json", "--column", "index"]).unwrap();
        assert_eq!(args.column.map(StatusColumn::from), Some(StatusColumn::Index));
    }

    #[test]
    fn test_cli_version_short_flag() {
        let err = Cli::try_parse_from(["git-status-json", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);

        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Illegal format: \"yaml\" (allowed formats: json, text)"
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
