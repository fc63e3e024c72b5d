//! Shared world state for task authorization BDD scenarios.

use std::collections::HashMap;

use chrono::Utc;
use rstest::fixture;
use taskflow::workflow::domain::{
    AccessDecision, InvalidAttributeCountError, PersistedTaskData, Role, RoleHierarchy, SkillTag,
    Task, TaskId, TaskStatus, TransitionAuthorizer, User, UserId, Username,
};

/// Scenario world for authorization behaviour tests.
pub struct AuthorizationWorld {
    pub authorizer: TransitionAuthorizer,
    pub users: HashMap<String, User>,
    pub task: Option<Task>,
    pub last_decision: Option<Result<AccessDecision, InvalidAttributeCountError>>,
}

impl AuthorizationWorld {
    /// Creates a world with an empty role hierarchy and no pending state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            authorizer: TransitionAuthorizer::new(RoleHierarchy::new()),
            users: HashMap::new(),
            task: None,
            last_decision: None,
        }
    }

    /// Returns the named user, creating them with the given role on first
    /// use.
    pub fn user_named(&mut self, name: &str, role: Role) -> Result<User, eyre::Report> {
        if let Some(user) = self.users.get(name) {
            return Ok(user.clone());
        }
        let user = User::new(
            Username::new(name).map_err(|err| eyre::eyre!("invalid username: {err}"))?,
            [role],
        );
        self.users.insert(name.to_owned(), user.clone());
        Ok(user)
    }

    /// Declares that holding `role` implies `implied` for later decisions.
    pub fn imply_role(&mut self, role: Role, implied: Role) {
        let hierarchy = self
            .authorizer
            .hierarchy()
            .clone()
            .with_implied(role, [implied]);
        self.authorizer = TransitionAuthorizer::new(hierarchy);
    }

    /// Builds a task snapshot in the given status.
    pub fn task_in(&mut self, status: TaskStatus, resource: Option<UserId>) -> Task {
        let now = Utc::now();
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: "Translate product brochure".to_owned(),
            status,
            deadline: now,
            skill: SkillTag::new("translation").expect("valid skill tag"),
            creator: UserId::new(),
            resource,
            owner: None,
            document_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        });
        self.task = Some(task.clone());
        task
    }
}

impl Default for AuthorizationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AuthorizationWorld {
    AuthorizationWorld::default()
}
