//! Validation engine for purchase order writes.
//!
//! These functions run before a record is persisted: they compute derived
//! fields and reject input that breaks a business rule.

pub mod rules;
pub mod shipment;

pub use rules::{apply_line_total, check_order_dates, compute_line_total, validate_purchase_order};
pub use shipment::{ShipmentCheckError, check_shipment};
