//! Shipments recorded against purchase order line items.

use super::{PurchaseOrderItemId, ShipmentId};
use serde::{Deserialize, Serialize};

/// Goods shipped against a single line item.
///
/// Both the item reference and the shipped quantity are optional on input so
/// that validation can report which one is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(rename = "ID")]
    id: ShipmentId,
    #[serde(rename = "purchaseOrderItem_ID", default)]
    purchase_order_item_id: Option<PurchaseOrderItemId>,
    #[serde(default)]
    quantity_shipped: Option<u32>,
}

impl Shipment {
    /// Creates an empty shipment with the given identifier.
    #[must_use]
    pub const fn new(id: ShipmentId) -> Self {
        Self {
            id,
            purchase_order_item_id: None,
            quantity_shipped: None,
        }
    }

    /// Sets the referenced line item.
    #[must_use]
    pub const fn for_item(mut self, item_id: PurchaseOrderItemId) -> Self {
        self.purchase_order_item_id = Some(item_id);
        self
    }

    /// Sets the shipped quantity.
    #[must_use]
    pub const fn with_quantity_shipped(mut self, quantity: u32) -> Self {
        self.quantity_shipped = Some(quantity);
        self
    }

    /// Returns the shipment identifier.
    #[must_use]
    pub const fn id(&self) -> ShipmentId {
        self.id
    }

    /// Returns the referenced line item, if set.
    #[must_use]
    pub const fn purchase_order_item_id(&self) -> Option<PurchaseOrderItemId> {
        self.purchase_order_item_id
    }

    /// Returns the shipped quantity, if set.
    #[must_use]
    pub const fn quantity_shipped(&self) -> Option<u32> {
        self.quantity_shipped
    }
}
