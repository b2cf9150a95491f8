//! State management-specific error types.

use crate::api::TaskId;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Task not found in state
    #[error("Task not found: {id}")]
    TaskNotFound { id: TaskId },

    /// No task is selected in the visible list
    #[error("No task selected")]
    NothingSelected,
}
