//! Shipment validation against the referenced line item.

use crate::purchase_order::{
    domain::{Shipment, ValidationError},
    ports::{ItemLookup, RepositoryError},
};
use thiserror::Error;

/// Failure of [`check_shipment`].
#[derive(Debug, Clone, Error)]
pub enum ShipmentCheckError {
    /// The shipment violates a business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Resolving the referenced line item failed.
    #[error(transparent)]
    Lookup(#[from] RepositoryError),
}

/// Validates a shipment before it is written.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. the line item reference is present;
/// 2. the shipped quantity is present (zero is a valid value);
/// 3. the referenced line item exists;
/// 4. the shipped quantity does not exceed the ordered quantity.
///
/// `lookup` is only consulted once the first two checks pass. A line item
/// without a quantity counts as having ordered zero.
///
/// # Errors
///
/// Returns [`ShipmentCheckError::Validation`] for the first failing check,
/// or [`ShipmentCheckError::Lookup`] when the lookup itself fails.
pub async fn check_shipment<L>(shipment: &Shipment, lookup: &L) -> Result<(), ShipmentCheckError>
where
    L: ItemLookup + ?Sized,
{
    let item_id = shipment
        .purchase_order_item_id()
        .ok_or(ValidationError::MissingItemReference)?;
    let shipped = shipment
        .quantity_shipped()
        .ok_or(ValidationError::MissingQuantityShipped)?;

    let item = lookup
        .lookup_item(item_id)
        .await?
        .ok_or(ValidationError::ItemNotFound(item_id))?;

    let ordered = item.quantity().unwrap_or(0);
    if shipped > ordered {
        return Err(ValidationError::QuantityExceedsOrdered { shipped, ordered }.into());
    }
    Ok(())
}
