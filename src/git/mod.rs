//! Git access layer
//!
//! Spawns `git status` and parses its porcelain output.

pub mod porcelain;
pub mod runner;

pub use porcelain::parse_porcelain;
pub use runner::{GitRunner, ProcessRunner};
