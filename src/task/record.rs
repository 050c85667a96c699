use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format for `created`, local time.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One to-do entry. The persisted form is a JSON object with keys
/// `task`, `completed`, `created`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,

    #[serde(default)]
    pub completed: bool,

    /// Empty for records recovered from the legacy line format.
    #[serde(default)]
    pub created: String,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            created: Local::now().format(CREATED_FORMAT).to_string(),
        }
    }

    /// Record recovered from a legacy plain-text line: pending, no
    /// creation timestamp.
    pub fn from_legacy_line(line: &str) -> Self {
        Self {
            description: line.trim().to_string(),
            completed: false,
            created: String::new(),
        }
    }
}
