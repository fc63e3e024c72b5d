//! Then steps for task authorization BDD scenarios.

use super::world::AuthorizationWorld;
use rstest_bdd_macros::then;
use taskflow::workflow::domain::AccessDecision;

fn last_decision(world: &AuthorizationWorld) -> Result<AccessDecision, eyre::Report> {
    world
        .last_decision
        .clone()
        .ok_or_else(|| eyre::eyre!("missing decision in scenario world"))?
        .map_err(|err| eyre::eyre!("authorization call failed: {err}"))
}

#[then("access is granted")]
fn access_is_granted(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    if decision != AccessDecision::Granted {
        return Err(eyre::eyre!("expected Granted, got {decision:?}"));
    }
    Ok(())
}

#[then("access is denied")]
fn access_is_denied(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    if decision != AccessDecision::Denied {
        return Err(eyre::eyre!("expected Denied, got {decision:?}"));
    }
    Ok(())
}

#[then("the authorizer abstains")]
fn authorizer_abstains(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    if decision != AccessDecision::Abstain {
        return Err(eyre::eyre!("expected Abstain, got {decision:?}"));
    }
    Ok(())
}
