//! Application services for purchase order orchestration.

pub mod lifecycle;
pub mod supplier;

pub use lifecycle::{
    LifecycleConfig, OrderLifecycleError, OrderLifecycleResult, OrderLifecycleService,
};
pub use supplier::{SupplierService, SupplierServiceError, SupplierServiceResult};
