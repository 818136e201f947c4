//! In-memory line item repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::purchase_order::{
    domain::{PurchaseOrderItem, PurchaseOrderItemId},
    ports::{ItemLookup, PurchaseOrderItemRepository, RepositoryError, RepositoryResult},
};

const ENTITY: &str = "PurchaseOrderItem";

/// Thread-safe in-memory line item repository.
///
/// Also serves as the [`ItemLookup`] for shipment validation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPurchaseOrderItemRepository {
    items: Arc<RwLock<HashMap<PurchaseOrderItemId, PurchaseOrderItem>>>,
}

impl InMemoryPurchaseOrderItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, id: PurchaseOrderItemId) -> RepositoryResult<Option<PurchaseOrderItem>> {
        let items = self.items.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(items.get(&id).cloned())
    }
}

#[async_trait]
impl PurchaseOrderItemRepository for InMemoryPurchaseOrderItemRepository {
    async fn store(&self, item: &PurchaseOrderItem) -> RepositoryResult<()> {
        let mut items = self.items.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if items.contains_key(&item.id()) {
            return Err(RepositoryError::duplicate(ENTITY, item.id()));
        }
        items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(&self, item: &PurchaseOrderItem) -> RepositoryResult<()> {
        let mut items = self.items.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = items
            .get_mut(&item.id())
            .ok_or_else(|| RepositoryError::not_found(ENTITY, item.id()))?;
        *stored = item.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: PurchaseOrderItemId,
    ) -> RepositoryResult<Option<PurchaseOrderItem>> {
        self.get(id)
    }
}

#[async_trait]
impl ItemLookup for InMemoryPurchaseOrderItemRepository {
    async fn lookup_item(
        &self,
        id: PurchaseOrderItemId,
    ) -> RepositoryResult<Option<PurchaseOrderItem>> {
        self.get(id)
    }
}
