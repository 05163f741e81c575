//! dass-core
//!
//! Pure domain types and storage key conventions. No I/O here: this is the
//! shared vocabulary of the questionnaire, the scorer, the exporters and the
//! result stores.

pub mod error;
pub mod keys;
pub mod models;
