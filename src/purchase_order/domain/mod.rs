//! Domain model for purchase orders.
//!
//! Orders, line items and shipments are plain records; all storage concerns
//! stay behind the ports.

mod error;
mod ids;
mod item;
mod order;
mod shipment;
mod status;

pub use error::{ErrorKind, ParseOrderStatusError, ValidationError};
pub use ids::{PurchaseOrderId, PurchaseOrderItemId, ShipmentId};
pub use item::PurchaseOrderItem;
pub use order::{PersistedPurchaseOrderData, PurchaseOrder};
pub use shipment::Shipment;
pub use status::PurchaseOrderStatus;
