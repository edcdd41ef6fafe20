//! MarkItemsSent command handler
//!
//! Kitchen transmission: clears every unsent flag on the order.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::status::{ensure_active, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};

/// MarkItemsSent action
#[derive(Debug, Clone)]
pub struct MarkItemsSentAction {
    pub order_id: i64,
}

impl MarkItemsSentAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        _metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let order = load_order_mut(&mut state.orders, self.order_id)?;
        ensure_active(order)?;

        order.mark_all_sent();

        Ok(Outcome::event(StateEvent::OrderItemsChanged {
            order_id: self.order_id,
        }))
    }
}
