//! Status codes and parsed status records
//!
//! Mirrors the two-letter `XY` status field of `git status --porcelain=v1`.

use crate::error::{AppError, ParseError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A single porcelain status letter
///
/// Variant order is the order categories appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCode {
    /// `' '`
    Unmodified,
    /// `M`
    Modified,
    /// `T`
    TypeChanged,
    /// `A`
    Added,
    /// `D`
    Deleted,
    /// `R`
    Renamed,
    /// `C`
    Copied,
    /// `U`, updated but unmerged
    Unmerged,
    /// `?`
    Untracked,
    /// `!`
    Ignored,
}

impl StatusCode {
    /// All codes in report order
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Unmodified,
        StatusCode::Modified,
        StatusCode::TypeChanged,
        StatusCode::Added,
        StatusCode::Deleted,
        StatusCode::Renamed,
        StatusCode::Copied,
        StatusCode::Unmerged,
        StatusCode::Untracked,
        StatusCode::Ignored,
    ];

    /// Decode a porcelain status letter
    ///
    /// # Errors
    /// Returns `ParseError::UnknownStatusCode` for letters outside the v1 alphabet
    pub fn from_char(c: char) -> Result<Self, ParseError> {
        match c {
            ' ' => Ok(StatusCode::Unmodified),
            'M' => Ok(StatusCode::Modified),
            'T' => Ok(StatusCode::TypeChanged),
            'A' => Ok(StatusCode::Added),
            'D' => Ok(StatusCode::Deleted),
            'R' => Ok(StatusCode::Renamed),
            'C' => Ok(StatusCode::Copied),
            'U' => Ok(StatusCode::Unmerged),
            '?' => Ok(StatusCode::Untracked),
            '!' => Ok(StatusCode::Ignored),
            other => Err(ParseError::UnknownStatusCode(other)),
        }
    }

    /// The porcelain letter for this code
    pub const fn as_char(&self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Modified => 'M',
            StatusCode::TypeChanged => 'T',
            StatusCode::Added => 'A',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::Copied => 'C',
            StatusCode::Unmerged => 'U',
            StatusCode::Untracked => '?',
            StatusCode::Ignored => '!',
        }
    }

    /// Category label used as JSON key and text prefix
    pub const fn label(&self) -> &'static str {
        match self {
            StatusCode::Unmodified => "unmodified",
            StatusCode::Modified => "modified",
            StatusCode::TypeChanged => "type-changed",
            StatusCode::Added => "added",
            StatusCode::Deleted => "deleted",
            StatusCode::Renamed => "renamed",
            StatusCode::Copied => "copied",
            StatusCode::Unmerged => "unmerged",
            StatusCode::Untracked => "untracked",
            StatusCode::Ignored => "ignored",
        }
    }

    /// Whether a record with this code carries an original path
    pub const fn has_original_path(&self) -> bool {
        matches!(self, StatusCode::Renamed | StatusCode::Copied)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which half of the `XY` field a report groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusColumn {
    /// `X`, the staged state
    Index,
    /// `Y`, the working tree state
    #[default]
    Worktree,
}

impl StatusColumn {
    pub const fn name(&self) -> &'static str {
        match self {
            StatusColumn::Index => "index",
            StatusColumn::Worktree => "worktree",
        }
    }
}

impl fmt::Display for StatusColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatusColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" => Ok(StatusColumn::Index),
            "worktree" => Ok(StatusColumn::Worktree),
            _ => Err(AppError::UnsupportedColumn(s.to_string())),
        }
    }
}

/// One record of porcelain output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// `X` code
    pub index: StatusCode,
    /// `Y` code
    pub worktree: StatusCode,
    /// Current path (destination for renames and copies)
    pub path: String,
    /// Source path of a rename or copy
    pub orig_path: Option<String>,
}

impl StatusEntry {
    /// Create an entry without an original path
    pub fn new(index: StatusCode, worktree: StatusCode, path: impl Into<String>) -> Self {
        Self {
            index,
            worktree,
            path: path.into(),
            orig_path: None,
        }
    }

    /// Attach the source path of a rename or copy
    pub fn with_orig_path(mut self, orig_path: impl Into<String>) -> Self {
        self.orig_path = Some(orig_path.into());
        self
    }

    /// The code for the requested column
    pub fn code(&self, column: StatusColumn) -> StatusCode {
        match column {
            StatusColumn::Index => self.index,
            StatusColumn::Worktree => self.worktree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_roundtrips_alphabet() {
        for code in StatusCode::ALL {
            assert_eq!(StatusCode::from_char(code.as_char()).unwrap(), code);
        }
    }

    #[test]
    fn test_from_char_unknown() {
        assert_eq!(
            StatusCode::from_char('Z'),
            Err(ParseError::UnknownStatusCode('Z'))
        );
    }

    #[test]
    fn test_labels_match_serde_names() {
        for code in StatusCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.label()));
        }
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("index".parse::<StatusColumn>().unwrap(), StatusColumn::Index);
        assert_eq!(
            "Worktree".parse::<StatusColumn>().unwrap(),
            StatusColumn::Worktree
        );
        assert!(matches!(
            "both".parse::<StatusColumn>(),
            Err(AppError::UnsupportedColumn(_))
        ));
    }

    #[test]
    fn test_entry_code_by_column() {
        let entry = StatusEntry::new(StatusCode::Added, StatusCode::Modified, "src/lib.rs");
        assert_eq!(entry.code(StatusColumn::Index), StatusCode::Added);
        assert_eq!(entry.code(StatusColumn::Worktree), StatusCode::Modified);
    }
}
