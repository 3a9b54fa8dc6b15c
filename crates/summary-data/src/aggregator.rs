//! Per-student aggregation over raw event log rows.
//!
//! The one piece of real logic in the tool: a single pass over the parsed
//! rows that tallies the tracked event kinds per student identifier.

use summary_core::models::{EventKind, SummaryTable};
use summary_core::{Result, SummaryError};
use tracing::debug;

/// One record from the input table, as handed over by the CSV reader.
pub type Row = Vec<String>;

/// Outcome counters from a single aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Data rows inspected (header excluded).
    pub rows_seen: usize,
    /// Rows skipped because they were too short to hold both columns.
    pub rows_skipped: usize,
    /// Rows whose event value matched a tracked kind.
    pub events_counted: usize,
}

/// Result of one aggregation pass: the table plus its stats.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub table: SummaryTable,
    pub stats: AggregationStats,
}

/// Stateless helper that tallies tracked events per student.
pub struct EventAggregator;

impl EventAggregator {
    /// Aggregate `rows` into a [`SummaryTable`].
    ///
    /// Row 0 is treated as a header and never aggregated, whatever it
    /// contains. `student_column` and `event_column` are 0-based positions
    /// within a row; both cell values are trimmed before use, and the
    /// trimmed student identifier doubles as the aggregation key.
    ///
    /// Tolerance policy:
    /// * a row too short to hold both columns is skipped silently;
    /// * an unrecognized event value still creates the student entry but
    ///   changes no counter.
    ///
    /// The pass is pure and deterministic: identical rows in identical
    /// order always produce an identical table, entries ordered by first
    /// appearance of the student identifier.
    ///
    /// # Errors
    ///
    /// [`SummaryError::EmptyInput`] when `rows` has fewer than 2 entries,
    /// i.e. nothing beyond the header.
    pub fn aggregate(
        rows: &[Row],
        student_column: usize,
        event_column: usize,
    ) -> Result<Aggregation> {
        if rows.len() < 2 {
            return Err(SummaryError::EmptyInput);
        }

        let min_len = student_column.max(event_column) + 1;
        let mut table = SummaryTable::new();
        let mut stats = AggregationStats::default();

        for row in &rows[1..] {
            stats.rows_seen += 1;

            if row.len() < min_len {
                stats.rows_skipped += 1;
                continue;
            }

            let student_id = row[student_column].trim();
            let event = row[event_column].trim();

            let summary = table.entry_mut(student_id);
            if let Some(kind) = EventKind::from_label(event) {
                summary.counts.increment(kind);
                stats.events_counted += 1;
            }
        }

        debug!(
            "Aggregated {} rows: {} skipped, {} events, {} students",
            stats.rows_seen,
            stats.rows_skipped,
            stats.events_counted,
            table.len(),
        );

        Ok(Aggregation { table, stats })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    /// A 6-column row in the Canvas export shape used throughout: student
    /// identifier at column 1, event type at column 5.
    fn event_row(student: &str, event: &str) -> Row {
        row(&["_", student, "_", "_", "_", event])
    }

    fn header() -> Row {
        row(&["attempt", "student_id", "name", "section", "timestamp", "event_type"])
    }

    // ── Basic aggregation ─────────────────────────────────────────────────────

    #[test]
    fn test_counts_per_student_in_first_seen_order() {
        let rows = vec![
            header(),
            event_row("S1", "page_focused"),
            event_row("S1", "page_blurred"),
            event_row("S2", "question_answered"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        let ids: Vec<&str> = agg.table.iter().map(|s| s.student_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2"]);

        let s1 = agg.table.get("S1").unwrap();
        assert_eq!(s1.counts.page_blurred, 1);
        assert_eq!(s1.counts.page_focused, 1);
        assert_eq!(s1.counts.question_answered, 0);

        let s2 = agg.table.get("S2").unwrap();
        assert_eq!(s2.counts.page_blurred, 0);
        assert_eq!(s2.counts.page_focused, 0);
        assert_eq!(s2.counts.question_answered, 1);
    }

    #[test]
    fn test_header_never_contributes() {
        // A header that looks exactly like a data row must still be skipped.
        let rows = vec![
            event_row("S1", "page_focused"),
            event_row("S2", "page_blurred"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        assert!(agg.table.get("S1").is_none());
        assert_eq!(agg.table.get("S2").unwrap().counts.page_blurred, 1);
    }

    #[test]
    fn test_recognized_event_increments_exactly_one_counter() {
        let rows = vec![header(), event_row("S1", "question_answered")];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        let counts = &agg.table.get("S1").unwrap().counts;
        assert_eq!(counts.question_answered, 1);
        assert_eq!(counts.total(), 1);
        assert_eq!(agg.stats.events_counted, 1);
    }

    // ── Tolerance policy ──────────────────────────────────────────────────────

    #[test]
    fn test_short_row_is_skipped_entirely() {
        // 5 columns when the event column is index 5: no student entry, no count.
        let rows = vec![
            header(),
            row(&["_", "S9", "_", "_", "page_focused"]),
            event_row("S1", "page_focused"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        assert!(agg.table.get("S9").is_none());
        assert_eq!(agg.table.len(), 1);
        assert_eq!(agg.stats.rows_skipped, 1);
    }

    #[test]
    fn test_row_length_equal_to_max_column_is_too_short() {
        // len == max(student, event) is still short by one.
        let rows = vec![header(), row(&["S1", "page_focused"])];
        let agg = EventAggregator::aggregate(&rows, 0, 2).unwrap();
        assert!(agg.table.is_empty());
    }

    #[test]
    fn test_unrecognized_event_keeps_student_but_changes_no_counter() {
        let rows = vec![header(), event_row("S1", "mouse_moved")];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        let counts = &agg.table.get("S1").unwrap().counts;
        assert_eq!(counts.total(), 0);
        assert_eq!(agg.stats.events_counted, 0);
    }

    #[test]
    fn test_all_zero_table_is_a_success_not_an_error() {
        // Valid rows, but no event ever matches a tracked kind.
        let rows = vec![
            header(),
            event_row("S1", "session_started"),
            event_row("S2", "page_view"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        assert_eq!(agg.table.len(), 2);
        assert!(agg.table.iter().all(|s| s.counts.total() == 0));
    }

    // ── Identifier trimming ───────────────────────────────────────────────────

    #[test]
    fn test_identifiers_trimmed_and_merged() {
        let rows = vec![
            header(),
            event_row("S1", "page_focused"),
            event_row(" S1 ", "page_blurred"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        assert_eq!(agg.table.len(), 1);
        let counts = &agg.table.get("S1").unwrap().counts;
        assert_eq!(counts.page_focused, 1);
        assert_eq!(counts.page_blurred, 1);
    }

    #[test]
    fn test_event_value_trimmed() {
        let rows = vec![header(), event_row("S1", " page_focused ")];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();
        assert_eq!(agg.table.get("S1").unwrap().counts.page_focused, 1);
    }

    #[test]
    fn test_identifiers_case_sensitive() {
        let rows = vec![
            header(),
            event_row("s1", "page_focused"),
            event_row("S1", "page_focused"),
        ];
        let agg = EventAggregator::aggregate(&rows, 1, 5).unwrap();
        assert_eq!(agg.table.len(), 2);
    }

    // ── Error behaviour ───────────────────────────────────────────────────────

    #[test]
    fn test_header_only_input_is_empty_input() {
        let rows = vec![header()];
        let err = EventAggregator::aggregate(&rows, 1, 5).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyInput));
    }

    #[test]
    fn test_no_rows_at_all_is_empty_input() {
        let err = EventAggregator::aggregate(&[], 1, 5).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyInput));
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn test_re_aggregation_is_idempotent() {
        let rows = vec![
            header(),
            event_row("S3", "page_blurred"),
            event_row("S1", "question_answered"),
            event_row("S3", "page_focused"),
        ];
        let first = EventAggregator::aggregate(&rows, 1, 5).unwrap();
        let second = EventAggregator::aggregate(&rows, 1, 5).unwrap();

        assert_eq!(first.table, second.table);
        assert_eq!(first.stats, second.stats);
    }
}
