//! In-memory repository with flush-scoped change tracking.
//!
//! Stands in for a unit-of-work-backed store in tests and embedding hosts:
//! every update records the loaded/pending status pair, and the batch is
//! drained once per flush.

use async_trait::async_trait;
use std::collections::HashMap;
use std::mem;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{ScheduledUpdate, Task, TaskId, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryWorkflowState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkflowState {
    tasks: HashMap<TaskId, Task>,
    resource_index: HashMap<UserId, Vec<TaskId>>,
    scheduled_updates: Vec<ScheduledUpdate>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_resource(state: &mut InMemoryWorkflowState, task: &Task) {
    if let Some(resource) = task.resource() {
        state.resource_index.entry(resource).or_default().push(task.id());
    }
}

fn deindex_resource(state: &mut InMemoryWorkflowState, task_id: TaskId, resource: UserId) {
    if let Some(ids) = state.resource_index.get_mut(&resource) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            state.resource_index.remove(&resource);
        }
    }
}

/// Merges an update into the pending flush batch, keeping the originally
/// loaded status so one task yields at most one entry per flush.
fn schedule_update(state: &mut InMemoryWorkflowState, previous: &Task, task: &Task) {
    let existing = state
        .scheduled_updates
        .iter_mut()
        .find(|update| update.task().id() == task.id());
    match existing {
        Some(update) => {
            *update = ScheduledUpdate::new(update.previous_status(), task.clone());
        }
        None => {
            state
                .scheduled_updates
                .push(ScheduledUpdate::new(previous.status(), task.clone()));
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_resource(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let previous = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        if previous.resource() != task.resource() {
            if let Some(old_resource) = previous.resource() {
                deindex_resource(&mut state, task.id(), old_resource);
            }
            index_resource(&mut state, task);
        }

        schedule_update(&mut state, &previous, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_resource(&self, resource: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .resource_index
            .get(&resource)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn take_scheduled_updates(&self) -> TaskRepositoryResult<Vec<ScheduledUpdate>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(mem::take(&mut state.scheduled_updates))
    }
}
