//! CSV event log loading.
//!
//! Reads an exported action log into raw rows for the aggregator. Parsing
//! proper (quoting, delimiters, line termination) is the `csv` crate's job;
//! this module's only contract with downstream is "ordered rows of string
//! fields, header included as row 0".

use std::path::Path;

use summary_core::{Result, SummaryError};
use tracing::{debug, warn};

use crate::aggregator::Row;

/// Reject paths whose extension is not `csv` (case-insensitive).
///
/// File selection is filtered before any parsing happens.
pub fn ensure_csv_extension(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if !is_csv {
        warn!("Rejecting non-CSV file: {}", path.display());
        return Err(SummaryError::NotCsv(path.to_path_buf()));
    }
    Ok(())
}

/// Parse the CSV file at `path` into raw rows.
///
/// The reader runs in flexible mode so that ragged rows (fewer or more
/// fields than the header) come through intact; tolerating them is the
/// aggregator's decision, not the parser's. The header is NOT consumed
/// here; it travels as row 0 so the aggregator can apply its own
/// unconditional skip rule.
///
/// # Errors
///
/// * [`SummaryError::FileRead`] when the file cannot be opened.
/// * [`SummaryError::CsvParse`] when the parser fails mid-file; the parse
///   error is propagated verbatim and no partial result is returned.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path).map_err(|source| SummaryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
