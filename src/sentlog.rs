//! In-memory log of successfully sent messages.

use std::fmt;

use crate::compose::Draft;

/// How many characters of the body make it into the log line.
const SNIPPET_LEN: usize = 50;

/// One successful send, summarized for display. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentLogEntry {
    pub recipient: String,
    pub subject: String,
    pub body_snippet: String,
}

impl SentLogEntry {
    /// Summarize a draft that was just sent. The snippet is the first 50
    /// characters of the body with a trailing ellipsis, appended even when
    /// the body is short.
    pub fn from_draft(draft: &Draft) -> Self {
        let mut body_snippet: String = draft.body.chars().take(SNIPPET_LEN).collect();
        body_snippet.push_str("...");
        Self {
            recipient: draft.recipient.clone(),
            subject: draft.subject.clone(),
            body_snippet,
        }
    }
}

impl fmt::Display for SentLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "To: {}, Subject: {}, Snippet: {}",
            self.recipient, self.subject, self.body_snippet
        )
    }
}

/// Append-only, insertion-ordered, memory-only. Cleared wholesale or not
/// at all; gone when the process exits.
#[derive(Debug, Default)]
pub struct SentLog {
    entries: Vec<SentLogEntry>,
}

impl SentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: SentLogEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SentLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
