//! RequestBill command handler
//!
//! Dine-in pre-bill. Hard precondition: every line must already be in the
//! kitchen. The UI enforces this too, but the core contract is what counts.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::status::{ensure_transition, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};
use shared::order::{Channel, OrderStatus};

/// RequestBill action
#[derive(Debug, Clone)]
pub struct RequestBillAction {
    pub order_id: i64,
}

impl RequestBillAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let order = load_order_mut(&mut state.orders, self.order_id)?;

        // 1. Dine-in only
        if order.channel != Channel::DineIn {
            return Err(ActionError::InvalidOperation(
                "bill can only be requested for dine-in orders".to_string(),
            ));
        }

        // 2. No pre-bill while unsent items exist
        if order.has_unsent_items() {
            return Err(ActionError::UnsentItems(self.order_id));
        }

        // 3. Must be in a being-served state
        ensure_transition(order, OrderStatus::BillRequested)?;

        order.push_status(OrderStatus::BillRequested, metadata.actor_role, metadata.timestamp);

        Ok(Outcome::event(StateEvent::OrderStatusChanged {
            order_id: self.order_id,
            status: OrderStatus::BillRequested,
        }))
    }
}
