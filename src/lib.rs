//! git-status-json - grouped git status output
//!
//! This library runs `git status --porcelain=v1 -z`, parses the records,
//! groups the changed files by status category, and renders the result as
//! JSON or aligned plaintext.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output formatting
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Status codes, records, and the grouped report
//! - [`error`]: Error types
//! - [`git`]: Git process runner and porcelain parser

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
