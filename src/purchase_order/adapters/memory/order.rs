//! In-memory purchase order repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::purchase_order::{
    domain::{PurchaseOrder, PurchaseOrderId},
    ports::{PurchaseOrderRepository, RepositoryError, RepositoryResult, StatusUpdate},
};

const ENTITY: &str = "PurchaseOrder";

/// Thread-safe in-memory purchase order repository.
///
/// Status updates stamp `modified_at` from the injected clock, the way a
/// database would maintain a managed column.
pub struct InMemoryPurchaseOrderRepository<C = DefaultClock>
where
    C: Clock,
{
    orders: Arc<RwLock<HashMap<PurchaseOrderId, PurchaseOrder>>>,
    clock: Arc<C>,
}

impl<C: Clock> Clone for InMemoryPurchaseOrderRepository<C> {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: Clock> fmt::Debug for InMemoryPurchaseOrderRepository<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryPurchaseOrderRepository")
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

impl InMemoryPurchaseOrderRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryPurchaseOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryPurchaseOrderRepository<C> {
    /// Creates an empty repository stamping updates with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            orders: Arc::default(),
            clock,
        }
    }
}

fn lock_poisoned(err: impl ToString) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> PurchaseOrderRepository for InMemoryPurchaseOrderRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn store(&self, order: &PurchaseOrder) -> RepositoryResult<()> {
        let mut orders = self.orders.write().map_err(lock_poisoned)?;
        if orders.contains_key(&order.id()) {
            return Err(RepositoryError::duplicate(ENTITY, order.id()));
        }
        orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn update(&self, order: &PurchaseOrder) -> RepositoryResult<()> {
        let mut orders = self.orders.write().map_err(lock_poisoned)?;
        let stored = orders
            .get_mut(&order.id())
            .ok_or_else(|| RepositoryError::not_found(ENTITY, order.id()))?;
        let mut replacement = order.clone();
        replacement.retain_managed_fields(stored, self.clock.utc());
        *stored = replacement;
        Ok(())
    }

    async fn find_by_id(&self, id: PurchaseOrderId) -> RepositoryResult<Option<PurchaseOrder>> {
        let orders = self.orders.read().map_err(lock_poisoned)?;
        Ok(orders.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: PurchaseOrderId,
        update: StatusUpdate,
    ) -> RepositoryResult<u64> {
        let mut orders = self.orders.write().map_err(lock_poisoned)?;
        let Some(order) = orders.get_mut(&id) else {
            return Ok(0);
        };
        if !update.applies_to(order.status()) {
            return Ok(0);
        }
        order.apply_status(update.status, self.clock.utc());
        Ok(1)
    }
}
