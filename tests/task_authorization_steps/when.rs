//! When steps for task authorization BDD scenarios.

use super::world::AuthorizationWorld;
use rstest_bdd_macros::when;
use taskflow::workflow::domain::Role;

fn request(
    world: &mut AuthorizationWorld,
    name: &str,
    role: Role,
    status: &str,
) -> Result<(), eyre::Report> {
    let actor = world.user_named(name, role)?;
    let task = world
        .task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let decision = world.authorizer.decide(Some(&actor), &task, &[status]);
    world.last_decision = Some(decision);
    Ok(())
}

#[when(r#""{name}" requests the status "{status}""#)]
fn named_user_requests(
    world: &mut AuthorizationWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    request(world, &name, Role::Resource, &status)
}

#[when(r#"the supervisor "{name}" with role "{role}" requests the status "{status}""#)]
fn supervisor_requests(
    world: &mut AuthorizationWorld,
    name: String,
    role: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = Role::try_from(role.as_str())
        .map_err(|err| eyre::eyre!("invalid role in scenario: {err}"))?;
    request(world, &name, parsed, &status)
}

#[when(r#"the administrator requests the status "{status}""#)]
fn administrator_requests(
    world: &mut AuthorizationWorld,
    status: String,
) -> Result<(), eyre::Report> {
    request(world, "diana", Role::Admin, &status)
}
