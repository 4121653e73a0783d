//! Parser for `git status --porcelain=v1 -z`
//!
//! Records are NUL-terminated and look like `XY PATH`. Rename and copy
//! records are followed by one extra field holding the source path. Paths
//! are never quoted in `-z` mode.

use crate::domain::{StatusCode, StatusEntry};
use crate::error::ParseError;

/// Parse NUL-separated porcelain v1 output into status entries
///
/// # Errors
/// Returns a `ParseError` for malformed records, unknown status letters,
/// or a rename/copy record whose source path is missing.
pub fn parse_porcelain(output: &str) -> Result<Vec<StatusEntry>, ParseError> {
    let mut fields = output.split('\0');
    let mut entries = Vec::new();

    while let Some(record) = fields.next() {
        // terminator of the last record
        if record.is_empty() {
            continue;
        }

        let entry = parse_record(record)?;
        let entry = if entry.index.has_original_path() || entry.worktree.has_original_path() {
            match fields.next() {
                Some(orig) if !orig.is_empty() => entry.with_orig_path(orig),
                _ => return Err(ParseError::MissingOriginalPath(entry.path)),
            }
        } else {
            entry
        };

        entries.push(entry);
    }

    log::debug!("Parsed {} status records", entries.len());
    Ok(entries)
}

fn parse_record(record: &str) -> Result<StatusEntry, ParseError> {
    let malformed = || ParseError::MalformedRecord(record.to_string());

    let mut chars = record.chars();
    let x = chars.next().ok_or_else(malformed)?;
    let y = chars.next().ok_or_else(malformed)?;
    if chars.next() != Some(' ') {
        return Err(malformed());
    }
    let path = chars.as_str();
    if path.is_empty() {
        return Err(malformed());
    }

    Ok(StatusEntry::new(
        StatusCode::from_char(x)?,
        StatusCode::from_char(y)?,
        path,
    ))
}
