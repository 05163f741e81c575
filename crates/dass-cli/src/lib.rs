//! dass-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise the
//! input, presentation and config flows without a terminal.

pub mod cli;
pub mod config;
pub mod form;
pub mod persist;
pub mod present;
