//! Line item lookup used by shipment validation.

use super::RepositoryResult;
use crate::purchase_order::domain::{PurchaseOrderItem, PurchaseOrderItemId};
use async_trait::async_trait;

/// Resolves the line item a shipment refers to.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    /// Returns the line item, or `None` when it does not exist.
    async fn lookup_item(
        &self,
        id: PurchaseOrderItemId,
    ) -> RepositoryResult<Option<PurchaseOrderItem>>;
}
