//! Task status enumeration and the structural transition policy table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// The six statuses form a directed graph, not a linear ordering;
/// [`TaskStatus::allowed_sources`] is the single source of truth for which
/// edges exist, independent of who requests a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created and waits in the unassigned pool.
    New,
    /// Task has been assigned to a resource.
    Assigned,
    /// The assigned resource is working on the task.
    Started,
    /// The assigned resource has completed the work.
    Finished,
    /// The result has been sent to the client.
    Sent,
    /// Task has been archived.
    Archived,
}

impl TaskStatus {
    /// All statuses in workflow order.
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Assigned,
        Self::Started,
        Self::Finished,
        Self::Sent,
        Self::Archived,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Assigned => "assigned",
            Self::Started => "started",
            Self::Finished => "finished",
            Self::Sent => "sent",
            Self::Archived => "archived",
        }
    }

    /// Returns the statuses a task may currently hold for a transition into
    /// `self` to be structurally legal.
    ///
    /// No source set contains its own target, so requesting the current
    /// status again is always structurally denied.
    #[must_use]
    pub const fn allowed_sources(self) -> &'static [Self] {
        match self {
            Self::New => &[Self::Assigned, Self::Started],
            Self::Assigned => &[Self::New, Self::Started],
            Self::Started => &[Self::Assigned, Self::Finished],
            Self::Finished => &[Self::Started],
            Self::Sent => &[Self::Finished],
            Self::Archived => &[Self::Sent],
        }
    }

    /// Returns `true` when the policy table declares an edge from `source`
    /// into `self`.
    #[must_use]
    pub fn can_transition_from(self, source: Self) -> bool {
        self.allowed_sources().contains(&source)
    }

    /// Returns `true` when no edge leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "assigned" => Ok(Self::Assigned),
            "started" => Ok(Self::Started),
            "finished" => Ok(Self::Finished),
            "sent" => Ok(Self::Sent),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
