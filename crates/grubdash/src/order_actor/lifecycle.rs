//! Guards on the stored status of an order.

use crate::error::RecordError;
use crate::model::Order;
use tracing::debug;

/// Fails once the order has reached its terminal status.
pub fn ensure_mutable(order: &Order) -> Result<(), RecordError> {
    if order.status.is_terminal() {
        debug!(id = %order.id, status = %order.status, "Order is terminal");
        return Err(RecordError::illegal("A delivered order cannot be changed"));
    }
    Ok(())
}

/// Fails unless the order is still pending.
pub fn ensure_deletable(order: &Order) -> Result<(), RecordError> {
    if !order.status.is_deletable() {
        debug!(id = %order.id, status = %order.status, "Order is past pending");
        return Err(RecordError::illegal(
            "An order cannot be deleted unless it is pending",
        ));
    }
    Ok(())
}
