//! AddItems command handler
//!
//! Dine-in re-orders ("adicionar") after the first kitchen send, and item
//! additions on any order still in flight. New lines merge by instance id
//! and always arrive marked unsent; the total is recomputed from the items.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::items::merge_items;
use crate::money::{recalculate_total, validate_item_input};
use crate::status::{ensure_active, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};
use shared::order::ItemInput;

/// AddItems action
#[derive(Debug, Clone)]
pub struct AddItemsAction {
    pub order_id: i64,
    pub items: Vec<ItemInput>,
}

impl AddItemsAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        _metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        // 1. Validate inputs
        if self.items.is_empty() {
            return Err(ActionError::InvalidOperation(
                "no items to add".to_string(),
            ));
        }
        for item in &self.items {
            validate_item_input(item)?;
        }

        // 2. Order must still be in flight. BillRequested does not block
        //    additions; the new lines simply need an explicit re-send.
        let order = load_order_mut(&mut state.orders, self.order_id)?;
        ensure_active(order)?;

        // 3. Merge and recompute
        merge_items(order, &self.items, false);
        recalculate_total(order);

        Ok(Outcome::event(StateEvent::OrderItemsChanged {
            order_id: self.order_id,
        }))
    }
}
