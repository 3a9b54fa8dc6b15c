//! Summary CSV export.
//!
//! Writes the downloadable summary: a fixed header then one comma-joined
//! line per student. Identifiers are written as-is, without quoting or
//! escaping; a known format limitation kept for compatibility with
//! existing consumers of the export.

use std::path::Path;

use summary_core::models::{EventKind, SummaryTable};
use summary_core::{Result, SummaryError};
use tracing::info;

/// Default file name for the exported summary.
pub const DEFAULT_EXPORT_NAME: &str = "student_summary.csv";

/// Header line of the export, column order fixed.
pub const EXPORT_HEADER: &str = "Student ID,page_blurred,page_focused,question_answered";

/// Serialize `table` to the export CSV text.
///
/// One line per student in table order, LF terminated:
/// `studentId,page_blurred,page_focused,question_answered`.
pub fn to_csv(table: &SummaryTable) -> String {
    let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + table.len() * 24);
    out.push_str(EXPORT_HEADER);
    out.push('\n');

    for summary in table {
        out.push_str(&summary.student_id);
        for kind in EventKind::ALL {
            out.push(',');
            out.push_str(&summary.counts.get(kind).to_string());
        }
        out.push('\n');
    }

    out
}

/// Write the export CSV for `table` to `path`.
pub fn write_summary_csv(path: &Path, table: &SummaryTable) -> Result<()> {
    std::fs::write(path, to_csv(table)).map_err(|source| SummaryError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote summary for {} students to {}", table.len(), path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
