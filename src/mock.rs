//! Mock implementations for testing
//!
//! Provides a git runner that returns canned output without spawning git.

use crate::error::GitError;
use crate::git::GitRunner;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock git runner for testing
#[derive(Debug)]
pub struct MockRunner {
    result: Mutex<Option<Result<String, GitError>>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockRunner {
    /// Runner that succeeds with the given porcelain output
    pub fn with_output(output: &str) -> Self {
        Self {
            result: Mutex::new(Some(Ok(output.to_string()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Runner that fails with the given error
    pub fn with_error(error: GitError) -> Self {
        Self {
            result: Mutex::new(Some(Err(error))),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Directories `status` was called with
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitRunner for MockRunner {
    fn status(&self, cwd: &Path) -> Result<String, GitError> {
        self.calls.lock().unwrap().push(cwd.to_path_buf());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(String::new()))
    }
}
