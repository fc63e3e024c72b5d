//! Error types for workflow domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain workflow values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The skill tag is empty after trimming.
    #[error("skill tag must not be empty")]
    EmptySkillTag,

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The requested status is not reachable from the task's current status.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Identifier of the task being transitioned.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the transition requested.
        to: TaskStatus,
    },

    /// The transition requires an assigned resource, but none is set.
    #[error("task {task_id} has no assigned resource, cannot move to {to}")]
    MissingResource {
        /// Identifier of the task being transitioned.
        task_id: TaskId,
        /// Status the transition requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing role labels from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
