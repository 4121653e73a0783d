//! Running the git executable
//!
//! The `GitRunner` trait abstracts the subprocess so command handlers can be
//! tested against canned output.

use crate::error::GitError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Arguments passed after `-C <cwd>`
pub const STATUS_ARGS: [&str; 3] = ["status", "--porcelain=v1", "-z"];

/// Source of porcelain status output
pub trait GitRunner {
    /// Return raw `git status --porcelain=v1 -z` output for the repository at `cwd`
    fn status(&self, cwd: &Path) -> Result<String, GitError>;
}

/// Runs a real git executable
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    git: PathBuf,
}

impl ProcessRunner {
    pub fn new(git: impl Into<PathBuf>) -> Self {
        Self { git: git.into() }
    }

    /// Path of the executable this runner spawns
    pub fn program(&self) -> &Path {
        &self.git
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for ProcessRunner {
    fn status(&self, cwd: &Path) -> Result<String, GitError> {
        log::debug!(
            "Running {} -C {} {}",
            self.git.display(),
            cwd.display(),
            STATUS_ARGS.join(" ")
        );

        let output = Command::new(&self.git)
            .arg("-C")
            .arg(cwd)
            .args(STATUS_ARGS)
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.git.clone(),
                source,
            })?;

        let stderr = single_line(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(GitError::ExitStatus {
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            log::warn!("git: {}", stderr);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Collapse multi-line stderr into one line
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
