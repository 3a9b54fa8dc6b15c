use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the event summary tool.
///
/// Every variant is recoverable: a failure is terminal for the current file
/// only, and the next file attempt starts clean.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The input had fewer than 2 rows (no data rows beyond the header).
    #[error("Input has no data rows beyond the header")]
    EmptyInput,

    /// Aggregation completed but produced zero student entries.
    #[error("No trackable events found in the input")]
    NoTrackableEvents,

    /// The upstream CSV parser reported a failure; passed through verbatim.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The selected file is not recognized as a CSV file.
    #[error("Not a CSV file: {0}")]
    NotCsv(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The summary export could not be written to disk.
    #[error("Failed to write summary to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the summary crates.
pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_input() {
        let msg = SummaryError::EmptyInput.to_string();
        assert_eq!(msg, "Input has no data rows beyond the header");
    }

    #[test]
    fn test_error_display_no_trackable_events() {
        let msg = SummaryError::NoTrackableEvents.to_string();
        assert_eq!(msg, "No trackable events found in the input");
    }

    #[test]
    fn test_error_display_not_csv() {
        let err = SummaryError::NotCsv(PathBuf::from("/some/log.txt"));
        let msg = err.to_string();
        assert_eq!(msg, "Not a CSV file: /some/log.txt");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SummaryError::FileRead {
            path: PathBuf::from("/some/events.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/events.csv"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SummaryError::FileWrite {
            path: PathBuf::from("/out/summary.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write summary to"));
        assert!(msg.contains("/out/summary.csv"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SummaryError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_csv() {
        // Unequal record lengths are an error unless the reader is flexible.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let csv_err = reader
            .records()
            .nth(1)
            .unwrap()
            .unwrap_err();
        let err: SummaryError = csv_err.into();
        assert!(err.to_string().contains("Failed to parse CSV"));
    }
}
