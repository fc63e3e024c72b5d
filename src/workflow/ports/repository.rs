//! Repository port for task persistence and flush-cycle change tracking.

use crate::workflow::domain::{ScheduledUpdate, Task, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Updates are tracked per flush cycle: every `update` schedules a
/// loaded/pending snapshot pair, and [`TaskRepository::take_scheduled_updates`]
/// drains the batch accumulated since the previous flush so the notifier can
/// observe it exactly once.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task and schedules the update for the
    /// next flush.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks currently assigned to the given resource.
    async fn find_by_resource(&self, resource: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Drains the scheduled updates recorded since the previous flush.
    ///
    /// Multiple updates to the same task within one flush are merged into a
    /// single entry keeping the originally loaded status.
    async fn take_scheduled_updates(&self) -> TaskRepositoryResult<Vec<ScheduledUpdate>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
