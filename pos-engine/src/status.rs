//! Status guards used by action handlers
//!
//! Thin wrappers over the transition table in `shared::order::status` that
//! turn a failed check into the right `ActionError`.

use crate::error::ActionError;
use shared::order::{Order, OrderStatus};

/// Order must exist in the map
pub fn load_order(
    orders: &std::collections::HashMap<i64, Order>,
    order_id: i64,
) -> Result<&Order, ActionError> {
    orders.get(&order_id).ok_or(ActionError::OrderNotFound(order_id))
}

pub fn load_order_mut(
    orders: &mut std::collections::HashMap<i64, Order>,
    order_id: i64,
) -> Result<&mut Order, ActionError> {
    orders
        .get_mut(&order_id)
        .ok_or(ActionError::OrderNotFound(order_id))
}

/// Order must not be in a terminal state
pub fn ensure_active(order: &Order) -> Result<(), ActionError> {
    if order.is_terminal() {
        return Err(ActionError::InvalidOperation(format!(
            "order {} is already {:?}",
            order.id, order.status
        )));
    }
    Ok(())
}

/// The transition must be legal for the order's channel
pub fn ensure_transition(order: &Order, next: OrderStatus) -> Result<(), ActionError> {
    if !order.status.can_transition(next, order.channel) {
        return Err(ActionError::InvalidTransition {
            from: order.status,
            to: next,
        });
    }
    Ok(())
}
