use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("no entry at index {index} (user has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors from reading or writing the persisted category list.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("category storage I/O error: {0}")]
    Io(String),

    #[error("malformed category document: {0}")]
    Parse(String),

    #[error("failed to serialize categories: {0}")]
    Serialize(String),
}

/// Errors surfaced while handling a dialogue event.
///
/// User mistakes (a non-numeric quantity, an out-of-range delete) are not
/// errors; they become ordinary replies.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error("dialogue worker unavailable: {0}")]
    WorkerUnavailable(String),
}
