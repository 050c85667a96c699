use tracing::debug;

use crate::task::Task;

/// Outcome of decoding backing-file content.
///
/// The fallback order is an explicit contract: structured records are
/// attempted first; anything that fails structural decoding is read as the
/// legacy one-description-per-line format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedContent {
    /// Current format: JSON array of task records.
    Structured(Vec<Task>),
    /// Legacy format: one task description per non-empty line.
    LegacyLines(Vec<Task>),
}

/// Decode file content with the two-tier strategy. Never fails: content
/// that is not a JSON array of records degrades to legacy lines, and
/// blank content decodes to an empty structured list.
pub fn decode(content: &str) -> DecodedContent {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return DecodedContent::Structured(Vec::new());
    }

    match serde_json::from_str::<Vec<Task>>(trimmed) {
        Ok(tasks) => {
            debug!(count = tasks.len(), "Decoded structured task file");
            DecodedContent::Structured(tasks)
        }
        Err(_) => {
            let tasks: Vec<Task> = trimmed
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(Task::from_legacy_line)
                .collect();
            debug!(count = tasks.len(), "Decoded legacy line-format task file");
            DecodedContent::LegacyLines(tasks)
        }
    }
}
