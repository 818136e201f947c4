//! In-memory shipment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::purchase_order::{
    domain::{PurchaseOrderItemId, Shipment, ShipmentId},
    ports::{RepositoryError, RepositoryResult, ShipmentRepository},
};

/// Thread-safe in-memory shipment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentRepository {
    state: Arc<RwLock<InMemoryShipmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryShipmentState {
    shipments: HashMap<ShipmentId, Shipment>,
    item_index: HashMap<PurchaseOrderItemId, Vec<ShipmentId>>,
}

impl InMemoryShipmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn unindex_item(
    index: &mut HashMap<PurchaseOrderItemId, Vec<ShipmentId>>,
    item_id: PurchaseOrderItemId,
    shipment_id: ShipmentId,
) {
    if let Some(ids) = index.get_mut(&item_id) {
        ids.retain(|id| *id != shipment_id);
        if ids.is_empty() {
            index.remove(&item_id);
        }
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn store(&self, shipment: &Shipment) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.shipments.contains_key(&shipment.id()) {
            return Err(RepositoryError::duplicate("Shipment", shipment.id()));
        }
        if let Some(item_id) = shipment.purchase_order_item_id() {
            state
                .item_index
                .entry(item_id)
                .or_default()
                .push(shipment.id());
        }
        state.shipments.insert(shipment.id(), shipment.clone());
        Ok(())
    }

    async fn update(&self, shipment: &Shipment) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let previous_item = state
            .shipments
            .get(&shipment.id())
            .ok_or_else(|| RepositoryError::not_found("Shipment", shipment.id()))?
            .purchase_order_item_id();
        if previous_item != shipment.purchase_order_item_id() {
            if let Some(item_id) = previous_item {
                unindex_item(&mut state.item_index, item_id, shipment.id());
            }
            if let Some(item_id) = shipment.purchase_order_item_id() {
                state
                    .item_index
                    .entry(item_id)
                    .or_default()
                    .push(shipment.id());
            }
        }
        state.shipments.insert(shipment.id(), shipment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ShipmentId) -> RepositoryResult<Option<Shipment>> {
        let state = self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.shipments.get(&id).cloned())
    }

    async fn find_by_item(&self, item_id: PurchaseOrderItemId) -> RepositoryResult<Vec<Shipment>> {
        let state = self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let shipments = state
            .item_index
            .get(&item_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.shipments.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(shipments)
    }
}
