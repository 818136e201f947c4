//! In-memory adapters for tests and embedding.

mod item;
mod order;
mod shipment;

pub use item::InMemoryPurchaseOrderItemRepository;
pub use order::InMemoryPurchaseOrderRepository;
pub use shipment::InMemoryShipmentRepository;
