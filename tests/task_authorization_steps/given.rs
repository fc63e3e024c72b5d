//! Given steps for task authorization BDD scenarios.

use super::world::AuthorizationWorld;
use rstest_bdd_macros::given;
use taskflow::workflow::domain::{Role, TaskStatus};

#[given(r#"a task in status "{status}" assigned to "{name}""#)]
fn task_assigned_to(
    world: &mut AuthorizationWorld,
    status: String,
    name: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let resource = world.user_named(&name, Role::Resource)?;
    world.task_in(parsed, Some(resource.id()));
    Ok(())
}

#[given(r#"the role "{role}" implies "{implied}""#)]
fn role_implies(
    world: &mut AuthorizationWorld,
    role: String,
    implied: String,
) -> Result<(), eyre::Report> {
    let holder = Role::try_from(role.as_str())
        .map_err(|err| eyre::eyre!("invalid role in scenario: {err}"))?;
    let implied = Role::try_from(implied.as_str())
        .map_err(|err| eyre::eyre!("invalid role in scenario: {err}"))?;
    world.imply_role(holder, implied);
    Ok(())
}

#[given(r#"an unassigned task in status "{status}""#)]
fn unassigned_task(world: &mut AuthorizationWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world.task_in(parsed, None);
    Ok(())
}
