//! Service layer for purchase order status transitions.

use crate::purchase_order::{
    domain::{ErrorKind, PurchaseOrder, PurchaseOrderId, PurchaseOrderStatus},
    ports::{PurchaseOrderRepository, RepositoryError, StatusUpdate},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration for [`OrderLifecycleService`].
///
/// # Examples
///
/// ```
/// use purchasing::purchase_order::services::LifecycleConfig;
///
/// assert!(!LifecycleConfig::default().guard_concurrent_transitions);
/// assert!(LifecycleConfig::guarded().guard_concurrent_transitions);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// Write transitions as compare-and-swap on the status read beforehand.
    ///
    /// When unset, two concurrent confirmations may both succeed.
    pub guard_concurrent_transitions: bool,
}

impl LifecycleConfig {
    /// Creates a configuration that rejects transitions racing another
    /// writer.
    #[must_use]
    pub const fn guarded() -> Self {
        Self {
            guard_concurrent_transitions: true,
        }
    }
}

/// Service-level errors for purchase order transitions.
#[derive(Debug, Clone, Error)]
pub enum OrderLifecycleError {
    /// The purchase order does not exist.
    #[error("PurchaseOrder with ID {0} not found")]
    NotFound(PurchaseOrderId),

    /// Confirmation requires a pending order.
    #[error("Order {order_id} is not in Pending status (current: {status})")]
    NotPending {
        /// Order that was not confirmed.
        order_id: PurchaseOrderId,
        /// Status found on the order.
        status: PurchaseOrderStatus,
    },

    /// Cancellation requires a pending or confirmed order.
    #[error("Order {order_id} can not be cancelled since its (current status: {status})")]
    NotCancellable {
        /// Order that was not cancelled.
        order_id: PurchaseOrderId,
        /// Status found on the order.
        status: PurchaseOrderStatus,
    },

    /// A guarded write found the status changed since it was read.
    #[error("Order {order_id} was modified concurrently (expected status: {expected})")]
    ConcurrentModification {
        /// Order whose write was rejected.
        order_id: PurchaseOrderId,
        /// Status observed before the write.
        expected: PurchaseOrderStatus,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl OrderLifecycleError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NotPending { .. }
            | Self::NotCancellable { .. }
            | Self::ConcurrentModification { .. } => ErrorKind::InvalidState,
            Self::Repository(_) => ErrorKind::Persistence,
        }
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

/// Result type for lifecycle service operations.
pub type OrderLifecycleResult<T> = Result<T, OrderLifecycleError>;

/// Purchase order lifecycle orchestration service.
///
/// Each transition reads the order, checks its status, writes the new status
/// and reads the order again. The second read is returned so that fields the
/// store maintains itself are current.
#[derive(Clone)]
pub struct OrderLifecycleService<R>
where
    R: PurchaseOrderRepository,
{
    repository: Arc<R>,
    config: LifecycleConfig,
}

impl<R> OrderLifecycleService<R>
where
    R: PurchaseOrderRepository,
{
    /// Creates a new lifecycle service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, LifecycleConfig::default())
    }

    /// Creates a new lifecycle service with a custom configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, config: LifecycleConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Confirms a pending purchase order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderLifecycleError::NotFound`] when the order does not
    /// exist, [`OrderLifecycleError::NotPending`] when it is in any other
    /// status, and [`OrderLifecycleError::ConcurrentModification`] when a
    /// guarded write loses a race.
    pub async fn confirm_order(
        &self,
        order_id: PurchaseOrderId,
    ) -> OrderLifecycleResult<PurchaseOrder> {
        let current = self.load(order_id).await?.status();
        if !current.can_transition_to(PurchaseOrderStatus::Confirmed) {
            debug!(%order_id, %current, "confirmation rejected");
            return Err(OrderLifecycleError::NotPending {
                order_id,
                status: current,
            });
        }
        self.transition(order_id, current, PurchaseOrderStatus::Confirmed)
            .await
    }

    /// Cancels a pending or confirmed purchase order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderLifecycleError::NotFound`] when the order does not
    /// exist, [`OrderLifecycleError::NotCancellable`] when it is cancelled or
    /// delivered, and [`OrderLifecycleError::ConcurrentModification`] when a
    /// guarded write loses a race.
    pub async fn cancel_order(
        &self,
        order_id: PurchaseOrderId,
    ) -> OrderLifecycleResult<PurchaseOrder> {
        let current = self.load(order_id).await?.status();
        if current.is_terminal() {
            debug!(%order_id, %current, "cancellation rejected");
            return Err(OrderLifecycleError::NotCancellable {
                order_id,
                status: current,
            });
        }
        self.transition(order_id, current, PurchaseOrderStatus::Cancelled)
            .await
    }

    async fn load(&self, order_id: PurchaseOrderId) -> OrderLifecycleResult<PurchaseOrder> {
        self.repository
            .find_by_id(order_id)
            .await?
            .ok_or(OrderLifecycleError::NotFound(order_id))
    }

    async fn transition(
        &self,
        order_id: PurchaseOrderId,
        from: PurchaseOrderStatus,
        to: PurchaseOrderStatus,
    ) -> OrderLifecycleResult<PurchaseOrder> {
        let update = if self.config.guard_concurrent_transitions {
            StatusUpdate::guarded(from, to)
        } else {
            StatusUpdate::unconditional(to)
        };

        let affected = self.repository.update_status(order_id, update).await?;
        if affected == 0 && self.config.guard_concurrent_transitions {
            warn!(%order_id, expected = %from, "status changed before write");
            return Err(OrderLifecycleError::ConcurrentModification {
                order_id,
                expected: from,
            });
        }

        let updated = self.load(order_id).await?;
        info!(%order_id, %from, %to, "purchase order transitioned");
        Ok(updated)
    }
}
