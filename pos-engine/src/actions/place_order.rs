//! PlaceOrder command handler
//!
//! Validates the draft, assigns a snowflake id, computes the entry status
//! from channel and payment method, and seeds the status history.

use tracing::info;

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::items::merge_items;
use crate::money::{recalculate_total, validate_item_input};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent, Toast};
use shared::order::{Channel, Order, OrderDraft, OrderStatus};
use shared::util::snowflake_id;

/// Default prep-time estimate when the draft carries none
const DEFAULT_ESTIMATED_MINUTES: i32 = 15;

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub draft: OrderDraft,
}

impl PlaceOrderAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        let draft = &self.draft;

        // 1. Validate the draft shape
        if draft.items.is_empty() {
            return Err(ActionError::InvalidOperation(
                "order draft has no items".to_string(),
            ));
        }
        for item in &draft.items {
            validate_item_input(item)?;
        }
        match draft.channel {
            Channel::Delivery if draft.customer.address.is_none() => {
                return Err(ActionError::InvalidOperation(
                    "delivery order requires an address".to_string(),
                ));
            }
            Channel::DineIn if draft.customer.table.is_none() => {
                return Err(ActionError::InvalidOperation(
                    "dine-in order requires a table".to_string(),
                ));
            }
            _ => {}
        }
        if let Some(t) = draft.tendered
            && !t.is_finite()
        {
            return Err(ActionError::InvalidAmount);
        }

        // 2. Assign id and entry status
        let order_id = snowflake_id();
        let mut order = Order::new(
            order_id,
            draft.channel,
            draft.customer.clone(),
            draft.payment_method,
            draft.tendered,
            draft.exact_amount,
            draft.estimated_minutes.unwrap_or(DEFAULT_ESTIMATED_MINUTES),
            metadata.actor_role,
            metadata.timestamp,
        );

        // 3. Items: lines are already "sent" only when the order enters the
        //    kitchen immediately
        let sent = order.status == OrderStatus::Preparing;
        merge_items(&mut order, &draft.items, sent);
        recalculate_total(&mut order);

        info!(
            order_id,
            channel = ?order.channel,
            entry_status = ?order.status,
            total = order.total,
            "order placed"
        );

        state.orders.insert(order_id, order);

        Ok(Outcome {
            order_id: Some(order_id),
            events: vec![StateEvent::OrderPlaced { order_id }],
            toasts: vec![Toast::success("Order placed")],
        })
    }
}
