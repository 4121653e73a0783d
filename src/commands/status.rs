//! Status command implementation
//!
//! Runs git status, groups the files by state, and prints the report.

use crate::cli::output::print_output;
use crate::config::Settings;
use crate::domain::StatusReport;
use crate::error::Result;
use crate::git::{parse_porcelain, GitRunner};

/// Build the grouped report for the repository in `settings.cwd`
pub fn collect_report(runner: &dyn GitRunner, settings: &Settings) -> Result<StatusReport> {
    let output = runner.status(&settings.cwd)?;
    let entries = parse_porcelain(&output)?;
    let report = StatusReport::from_entries(&entries, settings.column);

    log::debug!(
        "Grouped {} files into {} categories by {} column",
        report.file_count(),
        report.len(),
        settings.column
    );

    Ok(report)
}

/// Execute the status command
pub fn run_status(runner: &dyn GitRunner, settings: &Settings) -> Result<()> {
    let report = collect_report(runner, settings)?;

    print_output(&report, settings.format)?;

    Ok(())
}
