//! Purchase order record.

use super::{PurchaseOrderId, PurchaseOrderStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Purchase order header.
///
/// Input without `status`, `createdAt` or `modifiedAt` deserializes as a new
/// pending order stamped with the current time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(rename = "ID")]
    id: PurchaseOrderId,
    #[serde(default)]
    status: PurchaseOrderStatus,
    #[serde(default)]
    order_date: Option<NaiveDate>,
    #[serde(default)]
    expected_delivery_date: Option<NaiveDate>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    modified_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted purchase order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPurchaseOrderData {
    /// Persisted order identifier.
    pub id: PurchaseOrderId,
    /// Persisted lifecycle status.
    pub status: PurchaseOrderStatus,
    /// Persisted order date, if any.
    pub order_date: Option<NaiveDate>,
    /// Persisted expected delivery date, if any.
    pub expected_delivery_date: Option<NaiveDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub modified_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Creates a new pending purchase order.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: PurchaseOrderId::new(),
            status: PurchaseOrderStatus::Pending,
            order_date: None,
            expected_delivery_date: None,
            created_at: timestamp,
            modified_at: timestamp,
        }
    }

    /// Reconstructs a purchase order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPurchaseOrderData) -> Self {
        Self {
            id: data.id,
            status: data.status,
            order_date: data.order_date,
            expected_delivery_date: data.expected_delivery_date,
            created_at: data.created_at,
            modified_at: data.modified_at,
        }
    }

    /// Sets the order date.
    #[must_use]
    pub const fn with_order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = Some(order_date);
        self
    }

    /// Sets the expected delivery date.
    #[must_use]
    pub const fn with_expected_delivery_date(mut self, expected_delivery_date: NaiveDate) -> Self {
        self.expected_delivery_date = Some(expected_delivery_date);
        self
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> PurchaseOrderId {
        self.id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> PurchaseOrderStatus {
        self.status
    }

    /// Returns the order date, if set.
    #[must_use]
    pub const fn order_date(&self) -> Option<NaiveDate> {
        self.order_date
    }

    /// Returns the expected delivery date, if set.
    #[must_use]
    pub const fn expected_delivery_date(&self) -> Option<NaiveDate> {
        self.expected_delivery_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest stored change.
    #[must_use]
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Keeps the store-maintained fields of `stored` on a replacement record.
    pub(crate) const fn retain_managed_fields(&mut self, stored: &Self, at: DateTime<Utc>) {
        self.status = stored.status;
        self.created_at = stored.created_at;
        self.modified_at = at;
    }

    /// Records a status change made by the data store.
    pub(crate) const fn apply_status(&mut self, status: PurchaseOrderStatus, at: DateTime<Utc>) {
        self.status = status;
        self.modified_at = at;
    }
}
