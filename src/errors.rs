use thiserror::Error;

/// Error type that captures every user-visible tracker failure.
///
/// All of these are handled at the point of occurrence and surfaced as a
/// console message; none of them terminate the process. A missing store file
/// is not an error at all, see [`crate::storage::LoadOutcome::Missing`].
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid amount `{0}`: please enter a numeric value")]
    InvalidAmount(String),
    #[error("Invalid date `{0}`: please use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Selection {position} is out of range (valid: 1-{len})")]
    IndexOutOfRange { position: i64, len: usize },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
    #[error("Expense store is corrupt: {0}")]
    CorruptStore(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
