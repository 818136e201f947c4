//! Error types for purchase order validation and parsing.

use super::PurchaseOrderItemId;
use chrono::NaiveDate;
use thiserror::Error;

/// Classification of failures reported by the purchasing core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced record does not exist.
    NotFound,
    /// The operation is not permitted in the record's current status.
    InvalidState,
    /// Input violates a business rule.
    ValidationFailure,
    /// The data store failed.
    Persistence,
}

impl ErrorKind {
    /// Returns the HTTP status code a request boundary should answer with.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::InvalidState | Self::ValidationFailure => 400,
            Self::Persistence => 500,
        }
    }
}

/// Business-rule violations detected before a write is committed.
///
/// The `Display` output is the client-visible message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The expected delivery date is not after the order date.
    #[error("Expected Delivery Date must be after Order Date")]
    DeliveryNotAfterOrder {
        /// Order date on the rejected record.
        order_date: NaiveDate,
        /// Expected delivery date on the rejected record.
        expected_delivery_date: NaiveDate,
    },

    /// A shipment does not reference a line item.
    #[error("PurchaseOrderItem reference is required")]
    MissingItemReference,

    /// A shipment carries no shipped quantity.
    #[error("Quantity shipped is required")]
    MissingQuantityShipped,

    /// The line item referenced by a shipment does not exist.
    #[error("PurchaseOrderItem {0} not found")]
    ItemNotFound(PurchaseOrderItemId),

    /// A shipment ships more than the line item ordered.
    #[error("Quantity shipped cannot be more than ordered quantity")]
    QuantityExceedsOrdered {
        /// Quantity on the shipment.
        shipped: u32,
        /// Quantity ordered on the line item.
        ordered: u32,
    },
}

impl ValidationError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationFailure
    }
}

/// Error returned while parsing order statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown purchase order status: {0}")]
pub struct ParseOrderStatusError(pub String);
