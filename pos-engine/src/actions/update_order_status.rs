//! UpdateOrderStatus command handler
//!
//! Explicit staff transition checked against the transition table. The
//! guarded branches have their own actions: payment goes through
//! ConfirmPayment, cancellation through CancelOrder and the pre-bill through
//! RequestBill, so this handler rejects those targets outright.

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::status::{ensure_transition, load_order_mut};
use crate::store::AppState;
use shared::command::{ActionMetadata, StateEvent};
use shared::order::OrderStatus;

/// UpdateOrderStatus action
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusAction {
    pub order_id: i64,
    pub new_status: OrderStatus,
}

impl UpdateOrderStatusAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        // 1. Guarded targets have dedicated actions
        match self.new_status {
            OrderStatus::Paid => {
                return Err(ActionError::InvalidOperation(
                    "use ConfirmPayment to settle an order".to_string(),
                ));
            }
            OrderStatus::Cancelled => {
                return Err(ActionError::InvalidOperation(
                    "use CancelOrder to cancel an order".to_string(),
                ));
            }
            OrderStatus::BillRequested => {
                return Err(ActionError::InvalidOperation(
                    "use RequestBill to request the bill".to_string(),
                ));
            }
            _ => {}
        }

        // 2. Load order and check the transition table
        let order = load_order_mut(&mut state.orders, self.order_id)?;
        ensure_transition(order, self.new_status)?;

        // 3. Apply; entering the kitchen transmits every line
        order.push_status(self.new_status, metadata.actor_role, metadata.timestamp);
        if self.new_status == OrderStatus::Preparing {
            order.mark_all_sent();
        }

        Ok(Outcome::event(StateEvent::OrderStatusChanged {
            order_id: self.order_id,
            status: self.new_status,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PlaceOrderAction;
    use shared::order::{ActorRole, Channel, CustomerInfo, ItemInput, OrderDraft, PaymentMethod};

    fn metadata() -> ActionMetadata {
        ActionMetadata {
            command_id: "cmd-1".to_string(),
            actor_id: 1,
            actor_name: "Test Operator".to_string(),
            actor_role: ActorRole::Cook,
            timestamp: 1_000,
        }
    }

    fn place_pickup(state: &mut AppState) -> i64 {
        let action = PlaceOrderAction {
            draft: OrderDraft {
                channel: Channel::Pickup,
                customer: CustomerInfo {
                    name: "Luis".to_string(),
                    ..Default::default()
                },
                items: vec![ItemInput {
                    product_id: "p1".to_string(),
                    name: "Test Product".to_string(),
                    price: 10.0,
                    quantity: 1,
                    addons: vec![],
                    note: None,
                }],
                payment_method: PaymentMethod::Cash,
                tendered: None,
                exact_amount: true,
                estimated_minutes: None,
            },
        };
        action.execute(state, &metadata()).unwrap().order_id.unwrap()
    }

    #[test]
    fn test_legal_transition_appends_history() {
        let mut state = AppState::default();
        let order_id = place_pickup(&mut state);

        // AwaitingOrderConfirmation -> Preparing
        let action = UpdateOrderStatusAction {
            order_id,
            new_status: OrderStatus::Preparing,
        };
        action.execute(&mut state, &metadata()).unwrap();

        let order = state.orders.get(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.history.len(), 2);
        assert_eq!(order.history.last().unwrap().status, OrderStatus::Preparing);
        // Entering the kitchen transmits the lines
        assert!(order.items.iter().all(|i| i.sent_to_kitchen));
    }

    #[test]
    fn test_illegal_transition_rejected() {
        let mut state = AppState::default();
        let order_id = place_pickup(&mut state);

        let action = UpdateOrderStatusAction {
            order_id,
            new_status: OrderStatus::OutForDelivery, // pickup order
        };
        let result = action.execute(&mut state, &metadata());
        assert!(matches!(result, Err(ActionError::InvalidTransition { .. })));

        // State untouched
        let order = state.orders.get(&order_id).unwrap();
        assert_eq!(order.status, OrderStatus::AwaitingOrderConfirmation);
        assert_eq!(order.history.len(), 1);
    }

    #[test]
    fn test_unknown_order_rejected() {
        let mut state = AppState::default();
        let action = UpdateOrderStatusAction {
            order_id: 999,
            new_status: OrderStatus::Preparing,
        };
        assert_eq!(
            action.execute(&mut state, &metadata()),
            Err(ActionError::OrderNotFound(999))
        );
    }

    #[test]
    fn test_guarded_targets_rejected() {
        let mut state = AppState::default();
        let order_id = place_pickup(&mut state);

        for target in [
            OrderStatus::Paid,
            OrderStatus::Cancelled,
            OrderStatus::BillRequested,
        ] {
            let action = UpdateOrderStatusAction {
                order_id,
                new_status: target,
            };
            assert!(matches!(
                action.execute(&mut state, &metadata()),
                Err(ActionError::InvalidOperation(_))
            ));
        }
    }
}
