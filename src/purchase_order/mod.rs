//! Purchase order management for Purchasing.
//!
//! Validates line items, order dates and shipments before they are written,
//! and moves purchase orders through their status lifecycle
//! (`Pending -> Confirmed -> Cancelled`). The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Pre-write rules in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
