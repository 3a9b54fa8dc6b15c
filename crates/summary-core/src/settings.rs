use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-student event summary for quiz action log CSV exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "event-summary",
    about = "Per-student event summary for quiz action log CSV exports",
    version
)]
pub struct Settings {
    /// CSV event log file(s) to summarize, processed independently in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// 0-based column holding the student identifier
    #[arg(long, default_value = "1")]
    pub student_column: usize,

    /// 0-based column holding the event type
    #[arg(long, default_value = "5")]
    pub event_column: usize,

    /// Write the summary as a CSV file at this path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
