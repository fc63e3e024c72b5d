//! Transition authorization for task status changes.
//!
//! [`TransitionAuthorizer::decide`] is the sole decision point for "may this
//! actor move this task into that status". It layers three rules in fixed
//! order: structural legality from the policy table, ownership fast-paths
//! for the assigned resource, and a privileged role fallback. Decisions are
//! pure functions of their inputs plus the role hierarchy, which is
//! read-only at decision time.

use super::{Role, RoleHierarchy, Task, TaskStatus, User};
use thiserror::Error;

/// Verdict of a transition authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The actor may perform the transition.
    Granted,
    /// The actor may not perform the transition.
    Denied,
    /// The authorizer has no opinion; a composed policy or default-deny
    /// decides.
    Abstain,
}

/// Error for callers that supply anything other than exactly one requested
/// status attribute.
///
/// This signals a programming error in the caller and is never coerced into
/// a verdict.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("exactly one status attribute is required, got {0}")]
pub struct InvalidAttributeCountError(pub usize);

/// Decides whether an actor may move a task into a requested status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionAuthorizer {
    hierarchy: RoleHierarchy,
}

impl TransitionAuthorizer {
    /// Creates an authorizer backed by the given role hierarchy.
    #[must_use]
    pub const fn new(hierarchy: RoleHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Returns the role hierarchy backing this authorizer.
    #[must_use]
    pub const fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }

    /// Evaluates one authorization request given raw status attributes.
    ///
    /// Attributes that do not name a known status yield
    /// [`AccessDecision::Abstain`]; an unauthenticated actor (`None`) yields
    /// [`AccessDecision::Denied`]. The task snapshot must represent state
    /// strictly before the attempted mutation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAttributeCountError`] unless exactly one attribute is
    /// supplied.
    pub fn decide(
        &self,
        actor: Option<&User>,
        task: &Task,
        attributes: &[&str],
    ) -> Result<AccessDecision, InvalidAttributeCountError> {
        let [attribute] = attributes else {
            return Err(InvalidAttributeCountError(attributes.len()));
        };
        let Ok(requested) = TaskStatus::try_from(*attribute) else {
            return Ok(AccessDecision::Abstain);
        };
        Ok(self.decide_status(actor, task, requested))
    }

    /// Evaluates one authorization request for an already-parsed status.
    #[must_use]
    pub fn decide_status(
        &self,
        actor: Option<&User>,
        task: &Task,
        requested: TaskStatus,
    ) -> AccessDecision {
        let Some(user) = actor else {
            return AccessDecision::Denied;
        };

        // Structural legality overrides everything below: no role, however
        // privileged, may cross an edge the policy table does not declare.
        if !requested.can_transition_from(task.status()) {
            return AccessDecision::Denied;
        }

        match resource_fast_path(user, task, requested) {
            Some(decision) => decision,
            None if self.hierarchy.has_role(Role::Admin, user) => AccessDecision::Granted,
            None => AccessDecision::Denied,
        }
    }
}

/// Ownership rules letting the assigned resource self-service the obvious
/// next step. `None` falls through to the privileged role fallback.
fn resource_fast_path(user: &User, task: &Task, requested: TaskStatus) -> Option<AccessDecision> {
    let resource = task.resource();
    let actor_is_resource = resource == Some(user.id());

    match requested {
        // The resource may hand an assigned task back to the pool.
        TaskStatus::New if actor_is_resource && task.status() == TaskStatus::Assigned => {
            Some(AccessDecision::Granted)
        }
        // Nobody may start a task without an assigned resource.
        TaskStatus::Started if resource.is_none() => Some(AccessDecision::Denied),
        TaskStatus::Started if actor_is_resource && task.status() == TaskStatus::Assigned => {
            Some(AccessDecision::Granted)
        }
        TaskStatus::Finished if actor_is_resource => Some(AccessDecision::Granted),
        // No fast-path for assigned, sent, or archived.
        _ => None,
    }
}
