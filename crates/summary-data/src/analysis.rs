//! Per-file summary pipeline.
//!
//! Chains extension check, CSV reading, aggregation and the empty-result
//! check, returning a [`FileSummary`] ready for rendering and export.

use std::path::Path;

use summary_core::models::SummaryTable;
use summary_core::{Result, SummaryError};
use tracing::info;

use crate::aggregator::{AggregationStats, EventAggregator};
use crate::reader::{ensure_csv_extension, read_rows};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the summary table.
#[derive(Debug, Clone)]
pub struct SummaryMetadata {
    /// Data rows inspected (header excluded).
    pub rows_seen: usize,
    /// Rows skipped as too short to hold both columns.
    pub rows_skipped: usize,
    /// Rows whose event matched a tracked kind.
    pub events_counted: usize,
}

/// The complete output of [`summarize_csv_file`] for one input file.
#[derive(Debug, Clone)]
pub struct FileSummary {
    /// Per-student tallies in first-seen order.
    pub table: SummaryTable,
    /// Counters describing the pass over the input.
    pub metadata: SummaryMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full per-file pipeline.
///
/// 1. Reject the file unless its extension marks it as CSV.
/// 2. Parse it into raw rows (header travels as row 0).
/// 3. Aggregate tracked events per student.
/// 4. Fail with [`SummaryError::NoTrackableEvents`] when the aggregation
///    produced no student entry at all. A table whose entries all have zero
///    counts is NOT this case; it is a successful, all-zero summary.
///
/// Every invocation is independent: nothing persists between files, and a
/// failure here leaves the process ready for the next attempt.
pub fn summarize_csv_file(
    path: &Path,
    student_column: usize,
    event_column: usize,
) -> Result<FileSummary> {
    ensure_csv_extension(path)?;

    let rows = read_rows(path)?;
    let aggregation = EventAggregator::aggregate(&rows, student_column, event_column)?;

    if aggregation.table.is_empty() {
        return Err(SummaryError::NoTrackableEvents);
    }

    let AggregationStats {
        rows_seen,
        rows_skipped,
        events_counted,
    } = aggregation.stats;

    info!(
        "Summarized {}: {} students from {} rows",
        path.display(),
        aggregation.table.len(),
        rows_seen,
    );

    Ok(FileSummary {
        table: aggregation.table,
        metadata: SummaryMetadata {
            rows_seen,
            rows_skipped,
            events_counted,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
