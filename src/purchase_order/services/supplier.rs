//! Supplier-facing write service.
//!
//! Runs the validation engine as a before-write hook for every purchase
//! order, line item and shipment write, and exposes the order actions.

use crate::purchase_order::{
    domain::{
        ErrorKind, PurchaseOrder, PurchaseOrderId, PurchaseOrderItem, PurchaseOrderStatus,
        Shipment, ValidationError,
    },
    ports::{
        ItemLookup, PurchaseOrderItemRepository, PurchaseOrderRepository, RepositoryError,
        ShipmentRepository,
    },
    services::lifecycle::{OrderLifecycleError, OrderLifecycleService},
    validation::{self, ShipmentCheckError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by [`SupplierService`].
#[derive(Debug, Clone, Error)]
pub enum SupplierServiceError {
    /// The write was rejected by a business rule; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A new order was submitted in a status other than Pending.
    #[error("Order {order_id} must be created in Pending status (requested: {status})")]
    NotCreatedPending {
        /// Order that was not stored.
        order_id: PurchaseOrderId,
        /// Status carried by the submitted order.
        status: PurchaseOrderStatus,
    },
    /// An update tried to change the status outside the order actions.
    #[error(
        "Order {order_id} status can only be changed by confirming or cancelling it \
         (current: {current}, requested: {requested})"
    )]
    StatusNotEditable {
        /// Order that was not updated.
        order_id: PurchaseOrderId,
        /// Stored status.
        current: PurchaseOrderStatus,
        /// Status carried by the submitted order.
        requested: PurchaseOrderStatus,
    },
    /// An order action failed.
    #[error(transparent)]
    Lifecycle(#[from] OrderLifecycleError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<ShipmentCheckError> for SupplierServiceError {
    fn from(err: ShipmentCheckError) -> Self {
        match err {
            ShipmentCheckError::Validation(inner) => Self::Validation(inner),
            ShipmentCheckError::Lookup(inner) => Self::Repository(inner),
        }
    }
}

impl SupplierServiceError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(err) => err.kind(),
            Self::NotCreatedPending { .. } | Self::StatusNotEditable { .. } => {
                ErrorKind::InvalidState
            }
            Self::Lifecycle(err) => err.kind(),
            Self::Repository(_) => ErrorKind::Persistence,
        }
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Result type for supplier service operations.
pub type SupplierServiceResult<T> = Result<T, SupplierServiceError>;

/// Validated write and action entry point for purchase orders.
#[derive(Clone)]
pub struct SupplierService<O, I, S>
where
    O: PurchaseOrderRepository,
    I: PurchaseOrderItemRepository + ItemLookup,
    S: ShipmentRepository,
{
    orders: Arc<O>,
    items: Arc<I>,
    shipments: Arc<S>,
    lifecycle: OrderLifecycleService<O>,
}

impl<O, I, S> SupplierService<O, I, S>
where
    O: PurchaseOrderRepository,
    I: PurchaseOrderItemRepository + ItemLookup,
    S: ShipmentRepository,
{
    /// Creates a service over the given repositories.
    #[must_use]
    pub fn new(orders: Arc<O>, items: Arc<I>, shipments: Arc<S>) -> Self {
        let lifecycle = OrderLifecycleService::new(Arc::clone(&orders));
        Self::with_lifecycle(orders, items, shipments, lifecycle)
    }

    /// Creates a service with an explicitly configured lifecycle service.
    ///
    /// `lifecycle` should operate on the same order repository as `orders`.
    #[must_use]
    pub const fn with_lifecycle(
        orders: Arc<O>,
        items: Arc<I>,
        shipments: Arc<S>,
        lifecycle: OrderLifecycleService<O>,
    ) -> Self {
        Self {
            orders,
            items,
            shipments,
            lifecycle,
        }
    }

    /// Validates and stores a new purchase order.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierServiceError::Validation`] when the delivery date is
    /// not after the order date, [`SupplierServiceError::NotCreatedPending`]
    /// when the order is not pending, or [`SupplierServiceError::Repository`]
    /// when the store rejects the write.
    pub async fn create_purchase_order(
        &self,
        order: PurchaseOrder,
    ) -> SupplierServiceResult<PurchaseOrder> {
        reject_logged(validation::validate_purchase_order(&order))?;
        if order.status() != PurchaseOrderStatus::Pending {
            debug!(order_id = %order.id(), status = %order.status(), "order creation rejected");
            return Err(SupplierServiceError::NotCreatedPending {
                order_id: order.id(),
                status: order.status(),
            });
        }
        self.orders.store(&order).await?;
        Ok(order)
    }

    /// Validates and replaces the editable fields of an existing purchase
    /// order, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierServiceError::Validation`] when the delivery date is
    /// not after the order date, [`SupplierServiceError::StatusNotEditable`]
    /// when the submitted status differs from the stored one, and
    /// [`SupplierServiceError::Repository`] when the order does not exist or
    /// the store rejects the write.
    pub async fn update_purchase_order(
        &self,
        order: PurchaseOrder,
    ) -> SupplierServiceResult<PurchaseOrder> {
        reject_logged(validation::validate_purchase_order(&order))?;
        let current = self.stored_order(order.id()).await?.status();
        if current != order.status() {
            debug!(
                order_id = %order.id(),
                %current,
                requested = %order.status(),
                "status edit rejected"
            );
            return Err(SupplierServiceError::StatusNotEditable {
                order_id: order.id(),
                current,
                requested: order.status(),
            });
        }
        self.orders.update(&order).await?;
        self.stored_order(order.id()).await
    }

    /// Computes the line total and stores a new line item.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierServiceError::Repository`] when the store rejects the
    /// write.
    pub async fn create_purchase_order_item(
        &self,
        mut item: PurchaseOrderItem,
    ) -> SupplierServiceResult<PurchaseOrderItem> {
        validation::apply_line_total(&mut item);
        self.items.store(&item).await?;
        Ok(item)
    }

    /// Recomputes the line total and replaces an existing line item.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierServiceError::Repository`] when the item does not
    /// exist or the store rejects the write.
    pub async fn update_purchase_order_item(
        &self,
        mut item: PurchaseOrderItem,
    ) -> SupplierServiceResult<PurchaseOrderItem> {
        validation::apply_line_total(&mut item);
        self.items.update(&item).await?;
        Ok(item)
    }

    /// Validates a shipment against its line item and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`SupplierServiceError::Validation`] for the first failing
    /// shipment rule, or [`SupplierServiceError::Repository`] when the item
    /// lookup or the write fails.
    pub async fn create_shipment(&self, shipment: Shipment) -> SupplierServiceResult<Shipment> {
        if let Err(err) = validation::check_shipment(&shipment, &*self.items).await {
            debug!(shipment_id = %shipment.id(), error = %err, "shipment rejected");
            return Err(err.into());
        }
        self.shipments.store(&shipment).await?;
        Ok(shipment)
    }

    /// Validates a changed shipment against its line item and replaces it.
    ///
    /// # Errors
    ///
    /// As [`Self::create_shipment`], plus a repository not-found error when
    /// the shipment does not exist.
    pub async fn update_shipment(&self, shipment: Shipment) -> SupplierServiceResult<Shipment> {
        if let Err(err) = validation::check_shipment(&shipment, &*self.items).await {
            debug!(shipment_id = %shipment.id(), error = %err, "shipment update rejected");
            return Err(err.into());
        }
        self.shipments.update(&shipment).await?;
        Ok(shipment)
    }

    async fn stored_order(
        &self,
        order_id: PurchaseOrderId,
    ) -> SupplierServiceResult<PurchaseOrder> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("PurchaseOrder", order_id).into())
    }

    /// Confirms a pending purchase order.
    ///
    /// # Errors
    ///
    /// See [`OrderLifecycleService::confirm_order`].
    pub async fn confirm_order(
        &self,
        order_id: PurchaseOrderId,
    ) -> SupplierServiceResult<PurchaseOrder> {
        Ok(self.lifecycle.confirm_order(order_id).await?)
    }

    /// Cancels a pending or confirmed purchase order.
    ///
    /// # Errors
    ///
    /// See [`OrderLifecycleService::cancel_order`].
    pub async fn cancel_order(
        &self,
        order_id: PurchaseOrderId,
    ) -> SupplierServiceResult<PurchaseOrder> {
        Ok(self.lifecycle.cancel_order(order_id).await?)
    }
}

fn reject_logged(result: Result<(), ValidationError>) -> Result<(), ValidationError> {
    if let Err(err) = &result {
        debug!(error = %err, "purchase order rejected");
    }
    result
}
