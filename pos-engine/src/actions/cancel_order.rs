//! CancelOrder command handler
//!
//! Escape hatch to the terminal `Cancelled` state, legal from any
//! non-terminal status.

use tracing::info;

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::status::{ensure_transition, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent, Toast};
use shared::order::OrderStatus;

/// CancelOrder action
#[derive(Debug, Clone)]
pub struct CancelOrderAction {
    pub order_id: i64,
    pub reason: Option<String>,
}

impl CancelOrderAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let order = load_order_mut(&mut state.orders, self.order_id)?;
        ensure_transition(order, OrderStatus::Cancelled)?;

        order.cancel_reason = self.reason.clone();
        order.push_status(OrderStatus::Cancelled, metadata.actor_role, metadata.timestamp);

        info!(
            order_id = self.order_id,
            reason = ?self.reason,
            "order cancelled"
        );

        Ok(
            Outcome::event(StateEvent::OrderCancelled {
                order_id: self.order_id,
            })
            .with_toast(Toast::info("Order cancelled")),
        )
    }
}
