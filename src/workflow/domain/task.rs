//! Task aggregate root and its lifecycle rules.

use super::{DocumentId, SkillTag, TaskId, TaskStatus, UserId, WorkflowDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task is created in [`TaskStatus::New`] and moves through the workflow
/// graph via [`Task::transition_to`]. The status field is the only field
/// whose mutation participates in workflow events; everything else is
/// descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    deadline: DateTime<Utc>,
    skill: SkillTag,
    creator: UserId,
    resource: Option<UserId>,
    owner: Option<UserId>,
    document_ids: Vec<DocumentId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task title.
    pub title: String,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted required skill tag.
    pub skill: SkillTag,
    /// Persisted creator identity.
    pub creator: UserId,
    /// Persisted assigned resource, if any.
    pub resource: Option<UserId>,
    /// Persisted owner identity, if any.
    pub owner: Option<UserId>,
    /// Persisted attached document identifiers.
    pub document_ids: Vec<DocumentId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the [`TaskStatus::New`] status.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        skill: SkillTag,
        creator: UserId,
        clock: &impl Clock,
    ) -> Result<Self, WorkflowDomainError> {
        let raw_title = title.into();
        let normalized = raw_title.trim();
        if normalized.is_empty() {
            return Err(WorkflowDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::new(),
            title: normalized.to_owned(),
            status: TaskStatus::New,
            deadline,
            skill,
            creator,
            resource: None,
            owner: None,
            document_ids: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            deadline: data.deadline,
            skill: data.skill,
            creator: data.creator,
            resource: data.resource,
            owner: data.owner,
            document_ids: data.document_ids,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the skill tag required to perform this task.
    #[must_use]
    pub const fn skill(&self) -> &SkillTag {
        &self.skill
    }

    /// Returns the identity that created this task.
    #[must_use]
    pub const fn creator(&self) -> UserId {
        self.creator
    }

    /// Returns the assigned resource, if any.
    #[must_use]
    pub const fn resource(&self) -> Option<UserId> {
        self.resource
    }

    /// Returns the owner identity, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Returns the attached document identifiers.
    #[must_use]
    pub fn document_ids(&self) -> &[DocumentId] {
        &self.document_ids
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Assigns a resource and moves the task to [`TaskStatus::Assigned`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidStatusTransition`] when the
    /// policy table has no edge from the current status to `assigned`.
    pub fn assign_to(
        &mut self,
        resource: UserId,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        if !TaskStatus::Assigned.can_transition_from(self.status) {
            return Err(WorkflowDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: TaskStatus::Assigned,
            });
        }
        self.resource = Some(resource);
        self.status = TaskStatus::Assigned;
        self.touch(clock);
        Ok(())
    }

    /// Moves the task into `target` when the policy table permits it.
    ///
    /// Moving back to [`TaskStatus::New`] returns the task to the unassigned
    /// pool and clears the resource; every other target requires a resource
    /// to be set.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError::InvalidStatusTransition`] for edges the
    /// policy table does not declare, or
    /// [`WorkflowDomainError::MissingResource`] when no resource is assigned.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), WorkflowDomainError> {
        if !target.can_transition_from(self.status) {
            return Err(WorkflowDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        if target == TaskStatus::New {
            self.resource = None;
        } else if self.resource.is_none() {
            return Err(WorkflowDomainError::MissingResource {
                task_id: self.id,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Takes ownership of the task on behalf of `owner`.
    pub fn claim_ownership(&mut self, owner: UserId, clock: &impl Clock) {
        self.owner = Some(owner);
        self.touch(clock);
    }

    /// Attaches a document to the task.
    pub fn attach_document(&mut self, document_id: DocumentId, clock: &impl Clock) {
        self.document_ids.push(document_id);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
