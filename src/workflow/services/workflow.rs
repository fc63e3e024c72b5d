//! Orchestration service for task creation, assignment, and transitions.

use super::StatusChangeNotifier;
use crate::workflow::{
    domain::{
        AccessDecision, SkillTag, Task, TaskId, TaskStatus, TransitionAuthorizer, User, UserId,
        WorkflowDomainError,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    deadline: DateTime<Utc>,
    skill: SkillTag,
    creator: UserId,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        skill: SkillTag,
        creator: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            deadline,
            skill,
            creator,
        }
    }
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkflowDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Result type for workflow service operations.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Outcome of an authorized mutation request.
///
/// A refusal is an expected domain outcome, not an error; it is returned as
/// a value and logged only as an audit fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The mutation was authorized, committed, and flushed.
    Applied(Task),
    /// The authorizer refused the mutation; nothing was committed.
    Refused(AccessDecision),
}

/// Task workflow orchestration service.
///
/// Wires the authorizer in front of every status mutation and flushes one
/// notification batch per committed operation.
#[derive(Clone)]
pub struct TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    authorizer: TransitionAuthorizer,
    notifier: Arc<StatusChangeNotifier>,
}

impl<R, C> TaskWorkflowService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        authorizer: TransitionAuthorizer,
        notifier: Arc<StatusChangeNotifier>,
    ) -> Self {
        Self {
            repository,
            clock,
            authorizer,
            notifier,
        }
    }

    /// Returns the authorizer used in front of every mutation.
    #[must_use]
    pub const fn authorizer(&self) -> &TransitionAuthorizer {
        &self.authorizer
    }

    /// Creates a new task in the `new` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskWorkflowResult<Task> {
        let task = Task::new(
            request.title,
            request.deadline,
            request.skill,
            request.creator,
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Assigns a resource to a task on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::TaskNotFound`] for unknown tasks, or a
    /// domain/repository error when applying the authorized assignment
    /// fails.
    pub async fn assign_task(
        &self,
        actor: &User,
        task_id: TaskId,
        resource: UserId,
    ) -> TaskWorkflowResult<TransitionOutcome> {
        let mut task = self.load(task_id).await?;
        match self
            .authorizer
            .decide_status(Some(actor), &task, TaskStatus::Assigned)
        {
            AccessDecision::Granted => {}
            refusal => return Ok(refuse(actor, task_id, TaskStatus::Assigned, refusal)),
        }
        task.assign_to(resource, &*self.clock)?;
        self.commit(task).await
    }

    /// Moves a task into `requested` on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::TaskNotFound`] for unknown tasks, or a
    /// domain/repository error when applying the authorized transition
    /// fails.
    pub async fn request_transition(
        &self,
        actor: &User,
        task_id: TaskId,
        requested: TaskStatus,
    ) -> TaskWorkflowResult<TransitionOutcome> {
        let mut task = self.load(task_id).await?;
        match self.authorizer.decide_status(Some(actor), &task, requested) {
            AccessDecision::Granted => {}
            refusal => return Ok(refuse(actor, task_id, requested, refusal)),
        }
        task.transition_to(requested, &*self.clock)?;
        self.commit(task).await
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists under the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskWorkflowResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    async fn load(&self, task_id: TaskId) -> TaskWorkflowResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskWorkflowError::TaskNotFound(task_id))
    }

    async fn commit(&self, task: Task) -> TaskWorkflowResult<TransitionOutcome> {
        self.repository.update(&task).await?;
        let updates = self.repository.take_scheduled_updates().await?;
        self.notifier.notify_flush(&updates);
        Ok(TransitionOutcome::Applied(task))
    }
}

/// Records a refused mutation as an audit fact and wraps it as an outcome.
fn refuse(
    actor: &User,
    task_id: TaskId,
    requested: TaskStatus,
    refusal: AccessDecision,
) -> TransitionOutcome {
    tracing::debug!(
        task_id = %task_id,
        actor = %actor.id(),
        requested = requested.as_str(),
        decision = ?refusal,
        "transition refused"
    );
    TransitionOutcome::Refused(refusal)
}
