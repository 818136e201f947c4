//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use chrono::NaiveDate;
use purchasing::purchase_order::{
    adapters::memory::{
        InMemoryPurchaseOrderItemRepository, InMemoryPurchaseOrderRepository,
        InMemoryShipmentRepository,
    },
    services::SupplierService,
};
use rstest::fixture;

/// Supplier service wired to in-memory repositories.
pub type InMemorySupplierService = SupplierService<
    InMemoryPurchaseOrderRepository,
    InMemoryPurchaseOrderItemRepository,
    InMemoryShipmentRepository,
>;

/// Supplier service together with the repositories it writes to.
pub struct Supplier {
    pub orders: Arc<InMemoryPurchaseOrderRepository>,
    pub items: Arc<InMemoryPurchaseOrderItemRepository>,
    pub shipments: Arc<InMemoryShipmentRepository>,
    pub service: InMemorySupplierService,
}

/// Provides a fresh order repository for each test.
#[fixture]
pub fn orders() -> Arc<InMemoryPurchaseOrderRepository> {
    Arc::new(InMemoryPurchaseOrderRepository::new())
}

/// Provides a supplier service over empty in-memory repositories.
#[fixture]
pub fn supplier() -> Supplier {
    let orders = Arc::new(InMemoryPurchaseOrderRepository::new());
    let items = Arc::new(InMemoryPurchaseOrderItemRepository::new());
    let shipments = Arc::new(InMemoryShipmentRepository::new());
    let service = SupplierService::new(
        Arc::clone(&orders),
        Arc::clone(&items),
        Arc::clone(&shipments),
    );

    Supplier {
        orders,
        items,
        shipments,
        service,
    }
}

/// Builds a calendar date, failing the test on an invalid one.
///
/// # Errors
///
/// Returns an error when the components do not form a valid date.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| eyre::eyre!("invalid date {year}-{month}-{day}"))
}
