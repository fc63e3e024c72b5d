//! Actor identity for authorization decisions.

use super::{Role, UserId, Username};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An authenticated actor with a set of held role labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    roles: BTreeSet<Role>,
}

impl User {
    /// Creates a new user with a fresh identifier.
    #[must_use]
    pub fn new(username: Username, roles: impl IntoIterator<Item = Role>) -> Self {
        Self::from_parts(UserId::new(), username, roles)
    }

    /// Reconstructs a user from persisted identity data.
    #[must_use]
    pub fn from_parts(
        id: UserId,
        username: Username,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            id,
            username,
            roles: roles.into_iter().collect(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the roles held directly by this user.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }
}
