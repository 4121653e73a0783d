//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod status;

pub use status::{collect_report, run_status};
