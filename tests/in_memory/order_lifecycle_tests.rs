//! In-memory integration tests for order confirmation and cancellation.

use std::sync::Arc;

use super::helpers::orders;
use mockable::DefaultClock;
use purchasing::purchase_order::{
    adapters::memory::InMemoryPurchaseOrderRepository,
    domain::{ErrorKind, PurchaseOrder, PurchaseOrderStatus},
    ports::PurchaseOrderRepository,
    services::{LifecycleConfig, OrderLifecycleError, OrderLifecycleService},
};
use rstest::rstest;

async fn stored_order(
    orders: &InMemoryPurchaseOrderRepository,
) -> Result<PurchaseOrder, eyre::Report> {
    let order = PurchaseOrder::new(&DefaultClock);
    orders.store(&order).await?;
    Ok(order)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirm_then_cancel_persists_each_status(
    orders: Arc<InMemoryPurchaseOrderRepository>,
) -> Result<(), eyre::Report> {
    let service = OrderLifecycleService::new(Arc::clone(&orders));
    let order = stored_order(&orders).await?;

    let confirmed = service.confirm_order(order.id()).await?;
    eyre::ensure!(confirmed.status() == PurchaseOrderStatus::Confirmed);
    eyre::ensure!(confirmed.modified_at() >= order.modified_at());

    let cancelled = service.cancel_order(order.id()).await?;
    let stored = orders
        .find_by_id(order.id())
        .await?
        .ok_or_else(|| eyre::eyre!("order should still exist"))?;

    eyre::ensure!(cancelled.status() == PurchaseOrderStatus::Cancelled);
    eyre::ensure!(stored == cancelled, "returned order should match storage");
    eyre::ensure!(stored.created_at() == order.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_confirmation_is_rejected_without_write(
    orders: Arc<InMemoryPurchaseOrderRepository>,
) -> Result<(), eyre::Report> {
    let service = OrderLifecycleService::new(Arc::clone(&orders));
    let order = stored_order(&orders).await?;
    let confirmed = service.confirm_order(order.id()).await?;

    let result = service.confirm_order(order.id()).await;

    let Err(err) = result else {
        eyre::bail!("expected second confirmation to fail");
    };
    eyre::ensure!(err.kind() == ErrorKind::InvalidState);
    eyre::ensure!(err.status_code() == 400);
    let stored = orders
        .find_by_id(order.id())
        .await?
        .ok_or_else(|| eyre::eyre!("order should still exist"))?;
    eyre::ensure!(stored.modified_at() == confirmed.modified_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_order_cannot_be_confirmed(
    orders: Arc<InMemoryPurchaseOrderRepository>,
) -> Result<(), eyre::Report> {
    let service = OrderLifecycleService::new(Arc::clone(&orders));
    let order = stored_order(&orders).await?;
    service.cancel_order(order.id()).await?;

    let result = service.confirm_order(order.id()).await;

    eyre::ensure!(matches!(
        result,
        Err(OrderLifecycleError::NotPending {
            status: PurchaseOrderStatus::Cancelled,
            ..
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guarded_service_transitions_stored_orders(
    orders: Arc<InMemoryPurchaseOrderRepository>,
) -> Result<(), eyre::Report> {
    let service =
        OrderLifecycleService::with_config(Arc::clone(&orders), LifecycleConfig::guarded());
    let order = stored_order(&orders).await?;

    let confirmed = service.confirm_order(order.id()).await?;
    let cancelled = service.cancel_order(order.id()).await?;

    eyre::ensure!(service.config().guard_concurrent_transitions);
    eyre::ensure!(confirmed.status() == PurchaseOrderStatus::Confirmed);
    eyre::ensure!(cancelled.status() == PurchaseOrderStatus::Cancelled);
    Ok(())
}
