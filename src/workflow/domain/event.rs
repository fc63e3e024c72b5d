//! Transient values describing committed status changes.

use super::{Task, TaskStatus, UserId};

/// Domain event raised once per task whose status changed within a flush.
///
/// The event is keyed by the status the task moved into and carries the
/// task's assigned resource as the acting actor, which may be absent (a
/// hand-back to the pool clears the resource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeEvent {
    task: Task,
    operator: Option<UserId>,
}

impl StatusChangeEvent {
    /// Creates an event for a committed status change.
    #[must_use]
    pub const fn new(task: Task, operator: Option<UserId>) -> Self {
        Self { task, operator }
    }

    /// Returns the task after the status change.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the acting actor, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<UserId> {
        self.operator
    }

    /// Returns the event key: the status the task moved into.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.task.status()
    }
}

/// One scheduled update in a flush batch: the status a task was loaded
/// with, and the task as it is about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledUpdate {
    previous_status: TaskStatus,
    task: Task,
}

impl ScheduledUpdate {
    /// Creates a scheduled update from a loaded/pending snapshot pair.
    #[must_use]
    pub const fn new(previous_status: TaskStatus, task: Task) -> Self {
        Self {
            previous_status,
            task,
        }
    }

    /// Returns the status the task held when it was loaded.
    #[must_use]
    pub const fn previous_status(&self) -> TaskStatus {
        self.previous_status
    }

    /// Returns the task as it is about to be written.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns `true` when this flush changes the status field.
    #[must_use]
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.task.status()
    }
}
