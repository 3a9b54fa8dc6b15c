//! Data layer for the event summary tool.
//!
//! Responsible for reading CSV event logs into raw rows, aggregating rows
//! into per-student summaries, serializing summaries back to CSV and running
//! the top-level per-file pipeline.

pub mod aggregator;
pub mod analysis;
pub mod export;
pub mod reader;

pub use summary_core as core;
