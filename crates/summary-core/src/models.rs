use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── EventKind ─────────────────────────────────────────────────────────────────

/// One of the three tracked quiz event types.
///
/// Any other event label found in the input is unrecognized and simply
/// ignored; the vocabulary is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The student left the quiz-taking page.
    PageBlurred,
    /// The student returned to the quiz-taking page.
    PageFocused,
    /// The student answered a question.
    QuestionAnswered,
}

impl EventKind {
    /// All tracked kinds in the fixed display/export order.
    pub const ALL: [EventKind; 3] = [
        EventKind::PageBlurred,
        EventKind::PageFocused,
        EventKind::QuestionAnswered,
    ];

    /// Parse a raw event label. Returns `None` for anything outside the
    /// tracked vocabulary.
    pub fn from_label(label: &str) -> Option<EventKind> {
        match label {
            "page_blurred" => Some(EventKind::PageBlurred),
            "page_focused" => Some(EventKind::PageFocused),
            "question_answered" => Some(EventKind::QuestionAnswered),
            _ => None,
        }
    }

    /// The label as it appears in the event log and the export header.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::PageBlurred => "page_blurred",
            EventKind::PageFocused => "page_focused",
            EventKind::QuestionAnswered => "question_answered",
        }
    }
}

// ── EventCounts ───────────────────────────────────────────────────────────────

/// Per-student tally, one counter per tracked [`EventKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    /// Times the student left the quiz page.
    #[serde(default)]
    pub page_blurred: u64,
    /// Times the student returned to the quiz page.
    #[serde(default)]
    pub page_focused: u64,
    /// Questions the student answered.
    #[serde(default)]
    pub question_answered: u64,
}

impl EventCounts {
    /// Add 1 to the counter for `kind`.
    pub fn increment(&mut self, kind: EventKind) {
        match kind {
            EventKind::PageBlurred => self.page_blurred += 1,
            EventKind::PageFocused => self.page_focused += 1,
            EventKind::QuestionAnswered => self.question_answered += 1,
        }
    }

    /// The counter for `kind`.
    pub fn get(&self, kind: EventKind) -> u64 {
        match kind {
            EventKind::PageBlurred => self.page_blurred,
            EventKind::PageFocused => self.page_focused,
            EventKind::QuestionAnswered => self.question_answered,
        }
    }

    /// Sum of all three counters.
    pub fn total(&self) -> u64 {
        self.page_blurred + self.page_focused + self.question_answered
    }
}

// ── StudentSummary ────────────────────────────────────────────────────────────

/// Event tally for a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Trimmed student identifier, used verbatim (case-sensitive).
    pub student_id: String,
    /// Counts per tracked event kind.
    pub counts: EventCounts,
}

impl StudentSummary {
    /// New summary with all counts at zero.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            counts: EventCounts::default(),
        }
    }
}

// ── SummaryTable ──────────────────────────────────────────────────────────────

/// The full aggregation result for one processed file.
///
/// Entries keep the order in which their student identifier was first seen
/// in the input. Arbitrary map iteration order is not good enough for a
/// deterministic table/export, so this pairs the entry list with a position
/// index keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    entries: Vec<StudentSummary>,
    index: HashMap<String, usize>,
}

impl SummaryTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The summary for `student_id`, appending a fresh zeroed entry when the
    /// identifier has not been seen before.
    pub fn entry_mut(&mut self, student_id: &str) -> &mut StudentSummary {
        let pos = match self.index.get(student_id) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push(StudentSummary::new(student_id));
                self.index.insert(student_id.to_string(), pos);
                pos
            }
        };
        &mut self.entries[pos]
    }

    /// Look up the summary for `student_id`, if present.
    pub fn get(&self, student_id: &str) -> Option<&StudentSummary> {
        self.index.get(student_id).map(|&pos| &self.entries[pos])
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, StudentSummary> {
        self.entries.iter()
    }

    /// Number of distinct students.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no student entry exists at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SummaryTable {
    type Item = &'a StudentSummary;
    type IntoIter = std::slice::Iter<'a, StudentSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
