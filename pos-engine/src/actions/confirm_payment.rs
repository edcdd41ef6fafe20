//! ConfirmPayment command handler
//!
//! The paid-transition. Requires an open cash session, checks the transition
//! table, attaches the immutable settlement record, runs sale registration
//! exactly once and records the sale into the session.

use tracing::info;

use crate::actions::Outcome;
use crate::error::ActionError;
use crate::loyalty;
use crate::money::{change_due, validate_payment_input};
use crate::registration::register_sale;
use crate::status::{ensure_transition, load_order};
use crate::store::AppState;
use crate::till;
use shared::command::{ActionMetadata, StateEvent, Toast};
use shared::order::{OrderStatus, PaymentInput, PaymentMethod, Settlement};
use shared::util::is_loyalty_phone;

/// ConfirmPayment action
#[derive(Debug, Clone)]
pub struct ConfirmPaymentAction {
    pub order_id: i64,
    pub payment: PaymentInput,
}

impl ConfirmPaymentAction {
    pub fn execute(
        &self,
        state: &mut AppState,
        metadata: &ActionMetadata,
    ) -> Result<Outcome, ActionError> {
        // 1. All preconditions before any mutation
        {
            let order = load_order(&state.orders, self.order_id)?;
            ensure_transition(order, OrderStatus::Paid)?;
            validate_payment_input(&self.payment, order.total)?;
        }
        if !state.session.as_ref().is_some_and(|s| s.is_open()) {
            return Err(ActionError::NoOpenSession);
        }

        let mut order = state
            .orders
            .remove(&self.order_id)
            .ok_or(ActionError::OrderNotFound(self.order_id))?;
        let total = order.total;

        // 2. Settle. Cash computes change; every other method is settled for
        //    the exact total by its provider.
        let (tendered, change) = if self.payment.method == PaymentMethod::Cash {
            let tendered = if self.payment.exact_amount {
                total
            } else {
                self.payment.tendered.unwrap_or(total)
            };
            (Some(tendered), Some(change_due(tendered, total)))
        } else {
            (None, None)
        };

        order.payment_method = self.payment.method;
        order.tendered = tendered;
        order.exact_amount = self.payment.exact_amount;
        order.settlement = Some(Settlement {
            method: self.payment.method,
            total,
            tendered,
            change,
            timestamp: metadata.timestamp,
        });
        order.push_status(OrderStatus::Paid, metadata.actor_role, metadata.timestamp);

        // 3. Sale registration, exactly once per order
        let catalog = std::mem::take(&mut state.catalog);
        let customers = std::mem::take(&mut state.customers);
        let program = loyalty::active_program(&state.programs);
        let registered = register_sale(order, catalog, customers, program, metadata.timestamp);

        let accrued = program.is_some()
            && registered
                .order
                .customer
                .phone
                .as_deref()
                .is_some_and(is_loyalty_phone);
        let profit = registered.order.estimated_profit.unwrap_or(0.0);
        let phone = registered.order.customer.phone.clone();

        state.catalog = registered.catalog;
        state.customers = registered.customers;

        // 4. Record the sale into the open session
        let session = state.session.as_mut().ok_or(ActionError::NoOpenSession)?;
        till::record_sale(session, self.payment.method, total, profit)?;

        info!(
            order_id = self.order_id,
            method = ?self.payment.method,
            total,
            change = ?change,
            "payment confirmed"
        );

        state.orders.insert(self.order_id, registered.order);

        let mut events = vec![StateEvent::OrderPaid {
            order_id: self.order_id,
        }];
        if accrued && let Some(phone) = phone {
            events.push(StateEvent::CustomerUpdated { phone });
        }

        let mut toasts = vec![Toast::success("Payment settled")];
        if let Some(change) = change.filter(|c| *c > 0.0) {
            toasts.push(Toast::info(format!("Change due: {:.2}", change)));
        }

        Ok(Outcome {
            order_id: None,
            events,
            toasts,
        })
    }
}
