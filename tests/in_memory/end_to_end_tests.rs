//! End-to-end supplier flow over in-memory repositories.

use super::helpers::{Supplier, date, supplier};
use mockable::DefaultClock;
use purchasing::purchase_order::{
    domain::{
        PurchaseOrder, PurchaseOrderItem, PurchaseOrderItemId, PurchaseOrderStatus, Shipment,
        ShipmentId, ValidationError,
    },
    ports::{PurchaseOrderItemRepository, PurchaseOrderRepository, ShipmentRepository},
    services::SupplierServiceError,
};
use rstest::rstest;
use rust_decimal::Decimal;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn order_item_and_shipment_flow(supplier: Supplier) -> Result<(), eyre::Report> {
    let order = supplier
        .service
        .create_purchase_order(
            PurchaseOrder::new(&DefaultClock)
                .with_order_date(date(2024, 1, 10)?)
                .with_expected_delivery_date(date(2024, 1, 20)?),
        )
        .await?;

    let item = supplier
        .service
        .create_purchase_order_item(
            PurchaseOrderItem::new(PurchaseOrderItemId::new())
                .for_order(order.id())
                .with_quantity(5)
                .with_unit_price(Decimal::from(10)),
        )
        .await?;
    let stored_item = supplier
        .items
        .find_by_id(item.id())
        .await?
        .ok_or_else(|| eyre::eyre!("item should be stored"))?;
    eyre::ensure!(stored_item.line_total() == Decimal::from(50));

    let shipment = Shipment::new(ShipmentId::new())
        .for_item(item.id())
        .with_quantity_shipped(5);
    supplier.service.create_shipment(shipment.clone()).await?;
    eyre::ensure!(supplier.shipments.find_by_item(item.id()).await? == vec![shipment]);

    let confirmed = supplier.service.confirm_order(order.id()).await?;
    let stored_order = supplier
        .orders
        .find_by_id(order.id())
        .await?
        .ok_or_else(|| eyre::eyre!("order should be stored"))?;
    eyre::ensure!(confirmed.status() == PurchaseOrderStatus::Confirmed);
    eyre::ensure!(stored_order.status() == PurchaseOrderStatus::Confirmed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_day_delivery_is_rejected(supplier: Supplier) -> Result<(), eyre::Report> {
    let day = date(2024, 1, 10)?;
    let order = PurchaseOrder::new(&DefaultClock)
        .with_order_date(day)
        .with_expected_delivery_date(day);
    let order_id = order.id();

    let result = supplier.service.create_purchase_order(order).await;

    let Err(err) = result else {
        eyre::bail!("expected date validation to fail");
    };
    eyre::ensure!(
        err.to_string() == "Expected Delivery Date must be after Order Date",
        "unexpected message: {err}"
    );
    eyre::ensure!(supplier.orders.find_by_id(order_id).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shipment_beyond_ordered_quantity_is_rejected(
    supplier: Supplier,
) -> Result<(), eyre::Report> {
    let item = supplier
        .service
        .create_purchase_order_item(
            PurchaseOrderItem::new(PurchaseOrderItemId::new())
                .with_quantity(3)
                .with_unit_price(Decimal::from(10)),
        )
        .await?;
    let shipment = Shipment::new(ShipmentId::new())
        .for_item(item.id())
        .with_quantity_shipped(5);

    let result = supplier.service.create_shipment(shipment).await;

    eyre::ensure!(matches!(
        result,
        Err(SupplierServiceError::Validation(
            ValidationError::QuantityExceedsOrdered {
                shipped: 5,
                ordered: 3
            }
        ))
    ));
    eyre::ensure!(supplier.shipments.find_by_item(item.id()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shipment_for_unknown_item_is_rejected(supplier: Supplier) -> Result<(), eyre::Report> {
    let missing = PurchaseOrderItemId::new();
    let shipment = Shipment::new(ShipmentId::new())
        .for_item(missing)
        .with_quantity_shipped(1);

    let result = supplier.service.create_shipment(shipment).await;

    let Err(err) = result else {
        eyre::bail!("expected unknown item to fail");
    };
    eyre::ensure!(err.to_string() == format!("PurchaseOrderItem {missing} not found"));
    eyre::ensure!(err.status_code() == 400);
    Ok(())
}
