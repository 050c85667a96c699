use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskpadError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Invalid task number! Please enter a number between 1 and {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskpadError {
    /// Validation failures are recovered locally with a corrective message;
    /// everything else is a persistence failure surfaced once per attempt.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyDescription | Self::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaskpadError>;
