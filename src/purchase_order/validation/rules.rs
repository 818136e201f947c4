//! Pure validation rules and derived-field computations.
//!
//! Each rule inspects a record before it is written. Rules return `Ok(())`
//! on success or the first [`ValidationError`] that applies.

use crate::purchase_order::domain::{PurchaseOrder, PurchaseOrderItem, ValidationError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Computes `quantity × unit_price`, treating missing operands as zero.
///
/// Saturates instead of overflowing, so it never fails.
///
/// # Examples
///
/// ```
/// use purchasing::purchase_order::domain::{PurchaseOrderItem, PurchaseOrderItemId};
/// use purchasing::purchase_order::validation::compute_line_total;
/// use rust_decimal::Decimal;
///
/// let item = PurchaseOrderItem::new(PurchaseOrderItemId::new())
///     .with_quantity(5)
///     .with_unit_price(Decimal::from(10));
/// assert_eq!(compute_line_total(&item), Decimal::from(50));
/// ```
#[must_use]
pub fn compute_line_total(item: &PurchaseOrderItem) -> Decimal {
    let quantity = item.quantity().map_or(Decimal::ZERO, Decimal::from);
    let unit_price = item.unit_price().unwrap_or(Decimal::ZERO);
    quantity.saturating_mul(unit_price)
}

/// Stores the computed line total on `item`.
pub fn apply_line_total(item: &mut PurchaseOrderItem) {
    let line_total = compute_line_total(item);
    item.set_line_total(line_total);
}

/// Checks that the expected delivery date falls after the order date.
///
/// Nothing is checked unless both dates are present.
///
/// # Errors
///
/// Returns [`ValidationError::DeliveryNotAfterOrder`] when
/// `expected_delivery_date` is on or before `order_date`.
pub fn check_order_dates(
    order_date: Option<NaiveDate>,
    expected_delivery_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    let (Some(ordered), Some(expected)) = (order_date, expected_delivery_date) else {
        return Ok(());
    };
    if expected <= ordered {
        return Err(ValidationError::DeliveryNotAfterOrder {
            order_date: ordered,
            expected_delivery_date: expected,
        });
    }
    Ok(())
}

/// Applies [`check_order_dates`] to a purchase order.
///
/// # Errors
///
/// Returns [`ValidationError::DeliveryNotAfterOrder`] as described there.
pub fn validate_purchase_order(order: &PurchaseOrder) -> Result<(), ValidationError> {
    check_order_dates(order.order_date(), order.expected_delivery_date())
}
