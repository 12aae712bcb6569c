//! Error taxonomy for the task store and its persistence layer.
//!
//! Store operations fail with [`TaskError`]. Validation, lookup and index
//! failures are raised before anything is mutated, so the list is left exactly
//! as it was. A [`TaskError::Persistence`] is different: it is raised after the
//! in-memory change has been applied and only reports that the durable copy
//! could not be written.

use super::task::TaskId;
use thiserror::Error;

/// Errors raised by [`TaskList`](super::store::TaskList) operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A user-supplied value was rejected (currently only empty names).
    #[error("Invalid task: {0}")]
    Validation(String),

    /// No task with the given id exists in the list.
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// A position passed to `reorder` is outside `[0, len)`.
    #[error("Index {index} is out of range for a list of {len} tasks")]
    Index { index: usize, len: usize },

    /// The mutation was applied but saving the list failed.
    #[error("Task list changed but could not be saved: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors raised while encoding, decoding or storing the task list.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode task list: {0}")]
    Decode(#[source] serde_json::Error),

    /// The blob decoded but does not describe a valid task list.
    #[error("Saved task list is corrupt: {0}")]
    Corrupt(String),

    /// A key-value backend refused the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = TaskError> = std::result::Result<T, E>;
