//! Port contracts for the purchasing core.
//!
//! Ports define infrastructure-agnostic interfaces used by validation and
//! lifecycle services.

pub mod lookup;
pub mod repository;

pub use lookup::ItemLookup;
pub use repository::{
    PurchaseOrderItemRepository, PurchaseOrderRepository, RepositoryError, RepositoryResult,
    ShipmentRepository, StatusUpdate,
};
