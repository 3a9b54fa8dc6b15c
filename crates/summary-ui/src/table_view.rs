//! Summary table rendering.
//!
//! Formats a [`SummaryTable`] as an aligned text table for stdout: one row
//! per student, columns `Student ID` then the three tracked event counts in
//! their fixed order. Pure formatting; printing is the binary's job.

use summary_core::models::{EventKind, SummaryTable};
use unicode_width::UnicodeWidthStr;

/// Column header for the student identifier.
const ID_HEADER: &str = "Student ID";

/// Render `table` as an aligned text table.
///
/// The identifier column is left-aligned and sized to the widest identifier
/// (display width, so wide characters line up); count columns are
/// right-aligned under their event label. A separator rule sits between the
/// header and the data rows.
pub fn render_summary_table(table: &SummaryTable) -> String {
    // Identifier column width tracks the widest id or the header itself.
    let id_width = table
        .iter()
        .map(|s| s.student_id.width())
        .chain(std::iter::once(ID_HEADER.width()))
        .max()
        .unwrap_or(0);

    let count_widths: Vec<usize> = EventKind::ALL
        .iter()
        .map(|kind| {
            table
                .iter()
                .map(|s| s.counts.get(*kind).to_string().len())
                .chain(std::iter::once(kind.label().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    // Header row.
    push_cell(&mut out, ID_HEADER, id_width, false);
    for (kind, width) in EventKind::ALL.iter().zip(&count_widths) {
        out.push_str("  ");
        push_cell(&mut out, kind.label(), *width, true);
    }
    out.push('\n');

    // Separator rule.
    out.push_str(&"-".repeat(id_width));
    for width in &count_widths {
        out.push_str("  ");
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');

    // Data rows.
    for summary in table {
        push_cell(&mut out, &summary.student_id, id_width, false);
        for (kind, width) in EventKind::ALL.iter().zip(&count_widths) {
            out.push_str("  ");
            push_cell(&mut out, &summary.counts.get(*kind).to_string(), *width, true);
        }
        out.push('\n');
    }

    out
}

/// Append `text` padded to `width` display columns.
fn push_cell(out: &mut String, text: &str, width: usize, right_align: bool) {
    let pad = width.saturating_sub(text.width());
    if right_align {
        out.push_str(&" ".repeat(pad));
        out.push_str(text);
    } else {
        out.push_str(text);
        out.push_str(&" ".repeat(pad));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
