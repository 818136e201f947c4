//! When steps for purchase order lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use rstest_bdd_macros::when;

#[when("the purchase order is confirmed")]
fn purchase_order_confirmed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let order_id = world
        .order_id
        .ok_or_else(|| eyre::eyre!("missing order in scenario world"))?;
    world.last_result = Some(run_async(world.service.confirm_order(order_id)));
    Ok(())
}

#[when("the purchase order is cancelled")]
fn purchase_order_cancelled(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let order_id = world
        .order_id
        .ok_or_else(|| eyre::eyre!("missing order in scenario world"))?;
    world.last_result = Some(run_async(world.service.cancel_order(order_id)));
    Ok(())
}
