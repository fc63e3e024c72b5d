//! Domain model for the task workflow core.
//!
//! The workflow domain models the task status graph, per-transition
//! authorization, and the values carried by status-change events, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod authorize;
mod error;
mod event;
mod ids;
mod role;
mod status;
mod task;
mod user;

pub use authorize::{AccessDecision, InvalidAttributeCountError, TransitionAuthorizer};
pub use error::{ParseRoleError, ParseTaskStatusError, WorkflowDomainError};
pub use event::{ScheduledUpdate, StatusChangeEvent};
pub use ids::{DocumentId, SkillTag, TaskId, UserId, Username};
pub use role::{Role, RoleHierarchy};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use user::User;
