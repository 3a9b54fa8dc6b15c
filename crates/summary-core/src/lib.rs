//! Domain types for the student event summary tool.
//!
//! Holds the event vocabulary, the per-student summary records, the error
//! taxonomy and the CLI settings shared by the other crates.

pub mod error;
pub mod models;
pub mod settings;

pub use error::{Result, SummaryError};
