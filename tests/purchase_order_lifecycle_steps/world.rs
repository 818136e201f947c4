//! Shared world state for purchase order lifecycle BDD scenarios.

use std::sync::Arc;

use purchasing::purchase_order::{
    adapters::memory::InMemoryPurchaseOrderRepository,
    domain::{PurchaseOrder, PurchaseOrderId},
    services::{OrderLifecycleError, OrderLifecycleService},
};
use rstest::fixture;

/// Scenario world for lifecycle behaviour tests.
pub struct LifecycleWorld {
    pub repository: Arc<InMemoryPurchaseOrderRepository>,
    pub service: OrderLifecycleService<InMemoryPurchaseOrderRepository>,
    pub order_id: Option<PurchaseOrderId>,
    pub last_result: Option<Result<PurchaseOrder, OrderLifecycleError>>,
}

impl LifecycleWorld {
    /// Creates a world backed by an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryPurchaseOrderRepository::new());
        let service = OrderLifecycleService::new(Arc::clone(&repository));

        Self {
            repository,
            service,
            order_id: None,
            last_result: None,
        }
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
