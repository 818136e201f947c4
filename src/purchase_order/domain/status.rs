//! Purchase order status lifecycle.

use super::ParseOrderStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a purchase order.
///
/// `Delivered` is set by processes outside this crate. It is recognised here
/// only so that confirm and cancel can reject orders already past them.
///
/// Deserialization accepts the same text as `TryFrom<&str>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PurchaseOrderStatus {
    /// Order has been created and awaits confirmation.
    #[default]
    Pending,
    /// Order has been confirmed with the supplier.
    Confirmed,
    /// Order has been cancelled.
    Cancelled,
    /// Goods have been delivered.
    Delivered,
}

impl PurchaseOrderStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
            Self::Delivered => "Delivered",
        }
    }

    /// Returns whether this crate may move an order from `self` to `target`.
    ///
    /// Only `Pending -> Confirmed`, `Pending -> Cancelled` and
    /// `Confirmed -> Cancelled` are managed here.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed | Self::Cancelled) | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Delivered)
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PurchaseOrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "delivered" => Ok(Self::Delivered),
            _ => Err(ParseOrderStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for PurchaseOrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
