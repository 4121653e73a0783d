//! Domain models for git-status-json
//!
//! Status codes, parsed porcelain records, and the grouped report.
//! Codes are validated on construction (fail-fast pattern).

pub mod report;
pub mod status;

pub use report::StatusReport;
pub use status::{StatusCode, StatusColumn, StatusEntry};
