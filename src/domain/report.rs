//! Status report: files grouped by status category

use crate::domain::status::{StatusCode, StatusColumn, StatusEntry};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from status category to the set of paths in it
///
/// Categories iterate in `StatusCode` order and paths are sorted, so the
/// same porcelain input always renders the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusReport {
    groups: BTreeMap<StatusCode, BTreeSet<String>>,
}

impl StatusReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Group entries by the code in `column`
    pub fn from_entries(entries: &[StatusEntry], column: StatusColumn) -> Self {
        let mut report = Self::new();
        for entry in entries {
            report.insert(entry.code(column), entry.path.clone());
        }
        report
    }

    /// Add a path under a category; duplicates are ignored
    pub fn insert(&mut self, code: StatusCode, path: String) -> bool {
        self.groups.entry(code).or_default().insert(path)
    }

    /// Paths recorded for a category
    pub fn files(&self, code: StatusCode) -> Option<&BTreeSet<String>> {
        self.groups.get(&code)
    }

    /// Categories with their paths, in report order
    pub fn categories(&self) -> impl Iterator<Item = (StatusCode, &BTreeSet<String>)> {
        self.groups.iter().map(|(code, files)| (*code, files))
    }

    /// Number of categories present
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of paths across all categories
    pub fn file_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}
