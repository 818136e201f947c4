//! Given steps for purchase order lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use purchasing::purchase_order::{
    domain::{PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus},
    ports::{PurchaseOrderRepository, StatusUpdate},
};
use rstest_bdd_macros::given;

#[given(r#"a purchase order in status "{status}""#)]
fn purchase_order_in_status(
    world: &mut LifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let target = PurchaseOrderStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let order = PurchaseOrder::new(&DefaultClock);

    run_async(world.repository.store(&order)).wrap_err("store purchase order")?;
    if target != PurchaseOrderStatus::Pending {
        run_async(
            world
                .repository
                .update_status(order.id(), StatusUpdate::unconditional(target)),
        )
        .wrap_err("seed purchase order status")?;
    }

    world.order_id = Some(order.id());
    Ok(())
}

#[given("no purchase order exists")]
fn no_purchase_order_exists(world: &mut LifecycleWorld) {
    world.order_id = Some(PurchaseOrderId::new());
}
