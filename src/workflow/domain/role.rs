//! Role labels and the role reachability hierarchy.

use super::{ParseRoleError, User};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Role label held by, or reachable for, an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrative role; the privileged fallback for any transition that
    /// passed the structural checks.
    Admin,
    /// Supervisory role above admin in typical hierarchies.
    Super,
    /// A resource performs assigned tasks.
    Resource,
    /// A client commissions tasks.
    Client,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Super => "super",
            Self::Resource => "resource",
            Self::Client => "client",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "super" => Ok(Self::Super),
            "resource" => Ok(Self::Resource),
            "client" => Ok(Self::Client),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role inheritance configuration.
///
/// Maps a role to the roles it directly implies. Reachability is the
/// transitive closure over those implications, and a role always reaches
/// itself, so an empty hierarchy leaves any held set unchanged.
///
/// The hierarchy is read-only at decision time and may be shared freely
/// between concurrent authorization checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleHierarchy {
    implied: BTreeMap<Role, BTreeSet<Role>>,
}

impl RoleHierarchy {
    /// Creates a hierarchy with no implications.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            implied: BTreeMap::new(),
        }
    }

    /// Declares that holding `role` implies every role in `implies`.
    #[must_use]
    pub fn with_implied(mut self, role: Role, implies: impl IntoIterator<Item = Role>) -> Self {
        self.implied.entry(role).or_default().extend(implies);
        self
    }

    /// Expands a set of held roles into every role reachable through the
    /// hierarchy. The result always contains the held roles.
    #[must_use]
    pub fn reachable_roles(&self, held: &BTreeSet<Role>) -> BTreeSet<Role> {
        let mut reachable: BTreeSet<Role> = held.iter().copied().collect();
        let mut frontier: Vec<Role> = reachable.iter().copied().collect();
        while let Some(role) = frontier.pop() {
            if let Some(implied) = self.implied.get(&role) {
                for candidate in implied.iter().copied() {
                    if reachable.insert(candidate) {
                        frontier.push(candidate);
                    }
                }
            }
        }
        reachable
    }

    /// Returns `true` when `role` is reachable from the roles held by `user`.
    #[must_use]
    pub fn has_role(&self, role: Role, user: &User) -> bool {
        self.reachable_roles(user.roles()).contains(&role)
    }
}
