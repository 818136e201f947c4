//! Repository ports for purchase orders, line items and shipments.

use crate::purchase_order::domain::{
    PurchaseOrder, PurchaseOrderId, PurchaseOrderItem, PurchaseOrderItemId, PurchaseOrderStatus,
    Shipment, ShipmentId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Status patch applied by [`PurchaseOrderRepository::update_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Status to write.
    pub status: PurchaseOrderStatus,
    /// When set, the write only applies if the stored status still equals
    /// this value.
    pub expected: Option<PurchaseOrderStatus>,
}

impl StatusUpdate {
    /// Creates a patch that applies regardless of the stored status.
    #[must_use]
    pub const fn unconditional(status: PurchaseOrderStatus) -> Self {
        Self {
            status,
            expected: None,
        }
    }

    /// Creates a compare-and-swap patch.
    #[must_use]
    pub const fn guarded(expected: PurchaseOrderStatus, status: PurchaseOrderStatus) -> Self {
        Self {
            status,
            expected: Some(expected),
        }
    }

    /// Returns whether the patch applies to a record in `current` status.
    #[must_use]
    pub fn applies_to(&self, current: PurchaseOrderStatus) -> bool {
        self.expected.is_none_or(|expected| expected == current)
    }
}

/// Purchase order persistence contract.
#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    /// Stores a new purchase order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateRecord`] when the ID already
    /// exists.
    async fn store(&self, order: &PurchaseOrder) -> RepositoryResult<()>;

    /// Replaces the editable fields of an existing purchase order.
    ///
    /// The stored status and creation timestamp are kept; status changes go
    /// through [`Self::update_status`].
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the order does not exist.
    async fn update(&self, order: &PurchaseOrder) -> RepositoryResult<()>;

    /// Finds a purchase order by identifier.
    ///
    /// Returns `None` when the order does not exist.
    async fn find_by_id(&self, id: PurchaseOrderId) -> RepositoryResult<Option<PurchaseOrder>>;

    /// Writes a new status, returning the number of records changed.
    ///
    /// Zero means the order is missing or the patch's expected status did not
    /// match.
    async fn update_status(
        &self,
        id: PurchaseOrderId,
        update: StatusUpdate,
    ) -> RepositoryResult<u64>;
}

/// Line item persistence contract.
#[async_trait]
pub trait PurchaseOrderItemRepository: Send + Sync {
    /// Stores a new line item.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateRecord`] when the ID already
    /// exists.
    async fn store(&self, item: &PurchaseOrderItem) -> RepositoryResult<()>;

    /// Replaces an existing line item.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the item does not exist.
    async fn update(&self, item: &PurchaseOrderItem) -> RepositoryResult<()>;

    /// Finds a line item by identifier.
    async fn find_by_id(
        &self,
        id: PurchaseOrderItemId,
    ) -> RepositoryResult<Option<PurchaseOrderItem>>;
}

/// Shipment persistence contract.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Stores a new shipment.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateRecord`] when the ID already
    /// exists.
    async fn store(&self, shipment: &Shipment) -> RepositoryResult<()>;

    /// Replaces an existing shipment.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the shipment does not
    /// exist.
    async fn update(&self, shipment: &Shipment) -> RepositoryResult<()>;

    /// Finds a shipment by identifier.
    async fn find_by_id(&self, id: ShipmentId) -> RepositoryResult<Option<Shipment>>;

    /// Returns all shipments recorded against a line item.
    async fn find_by_item(&self, item_id: PurchaseOrderItemId) -> RepositoryResult<Vec<Shipment>>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate {entity} record: {id}")]
    DuplicateRecord {
        /// Entity name.
        entity: &'static str,
        /// Conflicting identifier.
        id: String,
    },

    /// The record to update was not found.
    #[error("{entity} record not found: {id}")]
    NotFound {
        /// Entity name.
        entity: &'static str,
        /// Missing identifier.
        id: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Creates a duplicate-record error.
    pub fn duplicate(entity: &'static str, id: impl ToString) -> Self {
        Self::DuplicateRecord {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
