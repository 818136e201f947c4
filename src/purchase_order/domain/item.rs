//! Purchase order line items.

use super::{PurchaseOrderId, PurchaseOrderItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line item of a purchase order.
///
/// `line_total` is derived from `quantity` and `unit_price` by the write
/// hook; values supplied on input are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    #[serde(rename = "ID")]
    id: PurchaseOrderItemId,
    #[serde(rename = "purchaseOrder_ID", default)]
    purchase_order_id: Option<PurchaseOrderId>,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    unit_price: Option<Decimal>,
    #[serde(default, skip_deserializing)]
    line_total: Decimal,
}

impl PurchaseOrderItem {
    /// Creates an empty line item with the given identifier.
    #[must_use]
    pub const fn new(id: PurchaseOrderItemId) -> Self {
        Self {
            id,
            purchase_order_id: None,
            quantity: None,
            unit_price: None,
            line_total: Decimal::ZERO,
        }
    }

    /// Sets the owning purchase order.
    #[must_use]
    pub const fn for_order(mut self, purchase_order_id: PurchaseOrderId) -> Self {
        self.purchase_order_id = Some(purchase_order_id);
        self
    }

    /// Sets the ordered quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the unit price.
    #[must_use]
    pub const fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Returns the line item identifier.
    #[must_use]
    pub const fn id(&self) -> PurchaseOrderItemId {
        self.id
    }

    /// Returns the owning purchase order, if set.
    #[must_use]
    pub const fn purchase_order_id(&self) -> Option<PurchaseOrderId> {
        self.purchase_order_id
    }

    /// Returns the ordered quantity, if set.
    #[must_use]
    pub const fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    /// Returns the unit price, if set.
    #[must_use]
    pub const fn unit_price(&self) -> Option<Decimal> {
        self.unit_price
    }

    /// Returns the line total computed at the last write.
    #[must_use]
    pub const fn line_total(&self) -> Decimal {
        self.line_total
    }

    pub(crate) const fn set_line_total(&mut self, line_total: Decimal) {
        self.line_total = line_total;
    }
}
